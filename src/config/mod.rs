//! Configuration module
//!
//! Loads optional mdview.toml files. Without a file every setting
//! takes its default.

mod types;

pub use types::{Config, HtmlConfig, SourceConfig, DEFAULT_THEME};

use crate::error::{MdviewError, Result};
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MdviewError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load the file at `path` if one was given, defaults otherwise
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => Ok(Config::default()),
    }
}
