//! Default category configuration loading from config.toml
//!
//! The titles listed here are offered to new users through the `category seed`
//! command, so they start with a sensible set of labels.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Category titles to seed for a user
    #[serde(default)]
    pub default_categories: Vec<String>,
}

/// Loads the category configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}
