use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::Config;

const APP_DIR: &str = "gbs";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Load and merge configs (global, then local overrides)
    pub fn load() -> Result<Self> {
        let current_dir = std::env::current_dir()?;

        let global = load_global_config()?.unwrap_or_default();
        let local = load_local_config(&current_dir)?.unwrap_or_default();

        Ok(global.merge(local))
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Load global config from <config_dir>/gbs/config.toml
fn load_global_config() -> Result<Option<Config>> {
    let Some(path) = dirs::config_dir().map(|p| p.join(APP_DIR).join(CONFIG_FILE)) else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    debug!(path = %path.display(), "loading global config");
    let content = std::fs::read_to_string(&path)?;
    Ok(Some(Config::from_toml(&content)?))
}

/// Load local config from .gbs/config.toml in the current directory or any parent
pub fn load_local_config(start_path: &Path) -> Result<Option<Config>> {
    for dir in start_path.ancestors() {
        let config_path = dir.join(format!(".{}", APP_DIR)).join(CONFIG_FILE);
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading local config");
            let content = std::fs::read_to_string(&config_path)?;
            return Ok(Some(Config::from_toml(&content)?));
        }
    }

    Ok(None)
}
