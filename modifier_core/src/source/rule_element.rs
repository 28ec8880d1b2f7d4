//! RuleElementSource - Modifiers authored as data on items and effects

use crate::modifier::Modifier;
use crate::source::ModifierSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule element loading error
#[derive(Error, Debug)]
pub enum RuleElementError {
    #[error("Failed to parse rule element JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse rule element TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Authored modifiers from one item, effect or feat
///
/// Predicates are validated while deserializing, so a malformed rule
/// element fails to load instead of misbehaving at resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleElementSource {
    pub id: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl RuleElementSource {
    pub fn new(id: impl Into<String>, modifiers: Vec<Modifier>) -> Self {
        RuleElementSource {
            id: id.into(),
            priority: 0,
            modifiers,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, RuleElementError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, RuleElementError> {
        Ok(toml::from_str(content)?)
    }
}

impl ModifierSource for RuleElementSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn apply(&self, modifiers: &mut Vec<Modifier>) {
        for modifier in &self.modifiers {
            let mut modifier = modifier.clone();
            if modifier.source.is_none() {
                modifier.source = Some(self.id.clone());
            }
            modifiers.push(modifier);
        }
    }
}
