use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::cli::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a starter configuration file into the current directory.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(ExitStatus::Success)
}
