use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;

/// Filter directives, e.g. `GBS_LOG=debug`
pub const LOG_ENV: &str = "GBS_LOG";
/// Overrides the log file location
pub const LOG_FILE_ENV: &str = "GBS_LOG_FILE";

/// Default log file: <cache_dir>/gbs/gbs.log
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("gbs").join("gbs.log"))
}

/// Install a file logger when `GBS_LOG` is set. The TUI owns stdout, so
/// nothing is ever logged to the terminal.
pub fn init() -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return Ok(());
    };

    let path = std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .or_else(default_log_path);
    let Some(path) = path else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    if install(filter, file) {
        debug!(path = %path.display(), "logging to file");
    }
    Ok(())
}

/// Set the global subscriber. Returns false if one was already set.
fn install(filter: EnvFilter, file: File) -> bool {
    match fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "subscriber already installed");
            false
        }
    }
}
