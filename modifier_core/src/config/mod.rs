//! Configuration loading from TOML files
//!
//! Nothing here is global: callers load [`Labels`] and
//! [`IwrVocabulary`](crate::iwr::IwrVocabulary) once and pass them by
//! reference wherever they are needed.

mod iwr;
mod labels;

pub use iwr::{
    default_iwr_vocabulary, load_iwr_vocabulary, parse_iwr_vocabulary, IwrVocabularyConfig,
    TagGroup,
};
pub use labels::{default_labels, load_labels, parse_labels, Labels};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Deserialize a TOML string
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
