//! Modifier - A typed, optionally predicate-gated numeric adjustment

mod factory;
mod value;

pub use factory::{AbilityModifier, ProficiencyModifier};
pub use value::{DataContext, DataRef, EmptyContext, ModifierValue};

use crate::predicate::Predicate;
use crate::types::RollOptions;
use serde::{Deserialize, Serialize};

/// Bonus/penalty type, which decides how modifiers stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierType {
    Ability,
    Proficiency,
    Circumstance,
    Status,
    Item,
    Untyped,
}

impl ModifierType {
    /// Get all modifier types
    pub fn all() -> &'static [ModifierType] {
        &[
            ModifierType::Ability,
            ModifierType::Proficiency,
            ModifierType::Circumstance,
            ModifierType::Status,
            ModifierType::Item,
            ModifierType::Untyped,
        ]
    }

    pub fn slug(self) -> &'static str {
        match self {
            ModifierType::Ability => "ability",
            ModifierType::Proficiency => "proficiency",
            ModifierType::Circumstance => "circumstance",
            ModifierType::Status => "status",
            ModifierType::Item => "item",
            ModifierType::Untyped => "untyped",
        }
    }

    /// Whether only the best bonus and worst penalty of this type count
    pub fn stacks_exclusively(self) -> bool {
        self != ModifierType::Untyped
    }
}

/// Manual toggle set by the declaring rule before resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierOverride {
    Enabled,
    Disabled,
}

impl ModifierOverride {
    pub fn is_enabled(self) -> bool {
        self == ModifierOverride::Enabled
    }
}

/// A numeric adjustment to a statistic
///
/// Modifiers are inputs: resolution never mutates them. Whether a modifier
/// counts toward a total is reported on the resolved entry instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// Display name, also the dedup key within a statistic
    pub name: String,
    #[serde(rename = "type")]
    pub modifier_type: ModifierType,
    pub value: ModifierValue,
    /// Gate evaluated against the roll options (empty: always applies)
    #[serde(default, skip_serializing_if = "Predicate::is_empty")]
    pub predicate: Predicate,
    /// Where the modifier came from (item, effect, feat)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, rename = "override", skip_serializing_if = "Option::is_none")]
    pub manual_override: Option<ModifierOverride>,
}

impl Modifier {
    /// Create a constant modifier with no predicate
    pub fn new(name: impl Into<String>, modifier_type: ModifierType, value: i64) -> Self {
        Modifier {
            name: name.into(),
            modifier_type,
            value: ModifierValue::Constant(value),
            predicate: Predicate::default(),
            source: None,
            manual_override: None,
        }
    }

    /// Create a modifier whose value is looked up at resolution time
    pub fn derived(name: impl Into<String>, modifier_type: ModifierType, data: DataRef) -> Self {
        Modifier {
            value: ModifierValue::Derived(data),
            ..Modifier::new(name, modifier_type, 0)
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_override(mut self, manual_override: ModifierOverride) -> Self {
        self.manual_override = Some(manual_override);
        self
    }

    /// Lowercase, dash-separated form of the name (`"Inspire Courage"` -> `"inspire-courage"`)
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }

    /// Whether the predicate admits this modifier (ignores overrides)
    pub fn test(&self, options: &RollOptions) -> bool {
        self.predicate.test(options)
    }
}
