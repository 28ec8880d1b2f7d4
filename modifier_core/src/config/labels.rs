//! Display labels for modifiers and IWR entries

use super::ConfigError;
use crate::iwr::IwrKind;
use crate::modifier::ModifierType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Human-readable names, keyed by slug
///
/// Lookups never fail: a missing slug falls back to a title-cased form of
/// the slug itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default)]
    pub modifier_types: HashMap<String, String>,
    /// Modifier names produced by the factories (`dex`, `trained`)
    #[serde(default)]
    pub modifiers: HashMap<String, String>,
    #[serde(default)]
    pub iwr_kinds: HashMap<String, String>,
    #[serde(default)]
    pub iwr_types: HashMap<String, String>,
}

impl Labels {
    pub fn modifier_type(&self, modifier_type: ModifierType) -> String {
        lookup(&self.modifier_types, modifier_type.slug())
    }

    /// Label for a modifier name; authored names without an entry pass through
    pub fn modifier(&self, name: &str) -> String {
        self.modifiers
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    pub fn iwr_kind(&self, kind: IwrKind) -> String {
        lookup(&self.iwr_kinds, kind.slug())
    }

    pub fn iwr_type(&self, iwr_type: &str) -> String {
        lookup(&self.iwr_types, iwr_type)
    }
}

fn lookup(table: &HashMap<String, String>, slug: &str) -> String {
    table.get(slug).cloned().unwrap_or_else(|| humanize(slug))
}

/// `"cold-iron"` -> `"Cold Iron"`
fn humanize(slug: &str) -> String {
    slug.split(|c: char| c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Load labels from a TOML file
pub fn load_labels(path: &Path) -> Result<Labels, ConfigError> {
    super::load_toml(path)
}

/// Load labels from a TOML string
pub fn parse_labels(content: &str) -> Result<Labels, ConfigError> {
    super::parse_toml(content)
}

/// The bundled English labels
pub fn default_labels() -> Labels {
    let toml = include_str!("../../config/labels.toml");
    parse_labels(toml).unwrap_or_else(|error| {
        warn!(%error, "bundled labels failed to parse, falling back to slugs");
        Labels::default()
    })
}
