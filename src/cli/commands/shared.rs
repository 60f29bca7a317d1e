use std::path::Path;

use anyhow::Result;

use crate::cli::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, ResolvedConfig, load_config};

/// Resolve the configuration for one command: the config file when present,
/// defaults otherwise, with the project name taken from the command line or
/// inferred from the root directory name.
pub fn resolve_config(args: &CommonArgs) -> Result<ResolvedConfig> {
    let loaded = load_config(&args.root)?;

    if args.verbose > 0 && !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let project = match &args.project {
        Some(name) => name.clone(),
        None => project_name_from_root(&args.root),
    };
    Ok(loaded.config.resolve(&project))
}

fn project_name_from_root(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string())
}
