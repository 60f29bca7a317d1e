use std::{
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".mopackrc.json";

/// Default directory holding the `.po` sources, relative to the project root.
pub const DEFAULT_MESSAGES_DIR: &str = "messages";

/// Default directory receiving the compiled locale tree, relative to the
/// project root.
pub const DEFAULT_LOCALE_DIR: &str = "locale";

/// Sparse, user-supplied configuration as it appears in `.mopackrc.json`.
///
/// Every key is optional; [`Config::resolve`] fills in the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Directory holding the .po sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<String>,
    /// Directory receiving the compiled catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Default translation domain for sources that do not embed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Remove every file under the locale directory on clean, not just
    /// compiled catalogs.
    #[serde(default)]
    pub force_clean: bool,
}

/// Fully-populated configuration.
///
/// Built once per invocation by [`Config::resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub messages: String,
    pub locale: String,
    pub domain: String,
    pub force_clean: bool,
}

impl Config {
    /// Fill in every absent key.
    ///
    /// Explicit values always win over defaults, so resolving the fields of
    /// an already-resolved configuration yields the same values again.
    ///
    /// The domain default depends on the source layout: conventional layouts
    /// (`messages` unset, `"messages"` or `"."`) take the project name, while
    /// a custom source directory lends its own name as the domain.
    pub fn resolve(&self, project_name: &str) -> ResolvedConfig {
        let messages = self
            .messages
            .clone()
            .unwrap_or_else(|| DEFAULT_MESSAGES_DIR.to_string());
        let locale = self
            .locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE_DIR.to_string());
        let domain = match &self.domain {
            Some(domain) => domain.clone(),
            None if messages == "." || messages == DEFAULT_MESSAGES_DIR => {
                project_name.to_string()
            }
            None => Path::new(&messages)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| project_name.to_string()),
        };
        ResolvedConfig {
            messages,
            locale,
            domain,
            force_clean: self.force_clean,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        messages: Some(DEFAULT_MESSAGES_DIR.to_string()),
        locale: Some(DEFAULT_LOCALE_DIR.to_string()),
        domain: None,
        force_clean: false,
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load `.mopackrc.json` from the project root, falling back to an empty
/// configuration when the file does not exist.
pub fn load_config(root: &Path) -> Result<ConfigLoadResult> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}
