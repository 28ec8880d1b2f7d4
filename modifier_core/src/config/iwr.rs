//! IWR vocabulary configuration loading

use super::ConfigError;
use crate::iwr::IwrVocabulary;
use crate::predicate::Statement;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Raw vocabulary file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IwrVocabularyConfig {
    /// Composite and aliased types, in predicate statement syntax
    #[serde(default)]
    pub special: HashMap<String, Vec<serde_json::Value>>,
    /// Types mapping one-to-one onto `<prefix>:<slug>` tags
    #[serde(default)]
    pub groups: Vec<TagGroup>,
}

/// Slugs sharing a tag prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagGroup {
    pub prefix: String,
    pub slugs: Vec<String>,
}

impl IwrVocabularyConfig {
    /// Validate every entry and build the vocabulary
    pub fn build(self) -> Result<IwrVocabulary, ConfigError> {
        let mut vocabulary = IwrVocabulary::new();
        let mut grouped: HashMap<String, String> = HashMap::new();

        for group in self.groups {
            if group.prefix.is_empty() {
                return Err(ConfigError::ValidationError(
                    "IWR tag group with an empty prefix".to_string(),
                ));
            }
            for slug in group.slugs {
                if let Some(previous) = grouped.insert(slug.clone(), group.prefix.clone()) {
                    return Err(ConfigError::ValidationError(format!(
                        "IWR type `{}` listed under both `{}` and `{}`",
                        slug, previous, group.prefix
                    )));
                }
                if !self.special.contains_key(&slug) {
                    let tag = format!("{}:{}", group.prefix, slug);
                    vocabulary.register(slug, vec![Statement::Literal(tag)]);
                }
            }
        }

        for (slug, raw) in self.special {
            let statements = raw
                .iter()
                .map(Statement::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ConfigError::ValidationError(format!("IWR type `{}`: {}", slug, e)))?;
            if statements.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "IWR type `{}` has no statements",
                    slug
                )));
            }
            vocabulary.register(slug, statements);
        }

        Ok(vocabulary)
    }
}

/// Load an IWR vocabulary from a TOML file
pub fn load_iwr_vocabulary(path: &Path) -> Result<IwrVocabulary, ConfigError> {
    let config: IwrVocabularyConfig = super::load_toml(path)?;
    config.build()
}

/// Load an IWR vocabulary from a TOML string
pub fn parse_iwr_vocabulary(content: &str) -> Result<IwrVocabulary, ConfigError> {
    let config: IwrVocabularyConfig = super::parse_toml(content)?;
    config.build()
}

/// The bundled vocabulary
pub fn default_iwr_vocabulary() -> IwrVocabulary {
    let toml = include_str!("../../config/iwr_vocabulary.toml");
    parse_iwr_vocabulary(toml).unwrap_or_else(|error| {
        warn!(%error, "bundled IWR vocabulary failed to load, every type will be unhandled");
        IwrVocabulary::new()
    })
}
