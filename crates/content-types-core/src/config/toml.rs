use std::path::Path;

use log::debug;

use crate::error::ContentTypeError;

use super::Config;

impl Config {
    /// Parses a config from a TOML document; missing keys take their defaults
    pub fn from_toml_str(input: &str) -> Result<Config, ContentTypeError> {
        toml::from_str(input).map_err(|e| ContentTypeError::ConfigError {
            field: "root".to_string(),
            message: format!("Failed to parse TOML configuration: {e}"),
        })
    }

    /// Reads and parses the TOML config file at `path`
    pub fn load(path: &Path) -> Result<Config, ContentTypeError> {
        debug!("Loading config from {}", path.display());
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// Convert the config to a TOML string representation
    pub fn to_toml_string(&self) -> Result<String, ContentTypeError> {
        toml::to_string(self).map_err(|e| ContentTypeError::ConfigError {
            field: "root".to_string(),
            message: format!("Failed to convert config to TOML string: {e}"),
        })
    }
}
