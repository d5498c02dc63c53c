use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the data directory (used by tests).
pub const DATA_DIR_ENV: &str = "DESKCALC_DATA_DIR";

/// Resolve the directory holding the history file: `DESKCALC_DATA_DIR` if
/// set, otherwise the platform data directory plus `deskcalc`.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join("deskcalc"))
}
