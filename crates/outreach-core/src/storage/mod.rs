mod config;

pub use config::{Config, LogConfig, OutputConfig, OutputFormat};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `<config dir>/outreach[-dev]/` based on OUTREACH_ENV.
///
/// Set OUTREACH_ENV=dev to use development data directory. OUTREACH_CONFIG_DIR
/// overrides the location entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("OUTREACH_CONFIG_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    let env = std::env::var("OUTREACH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("outreach-dev")
    } else {
        base_dir.join("outreach")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
