//! Constant and deferred modifier values

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// External data a deferred value is resolved against (e.g. actor level)
pub trait DataContext {
    /// Look up an integer by dotted path (`"actor.level"`)
    fn lookup(&self, path: &str) -> Option<i64>;
}

/// Context with no data; every lookup misses
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContext;

impl DataContext for EmptyContext {
    fn lookup(&self, _path: &str) -> Option<i64> {
        None
    }
}

impl DataContext for HashMap<String, i64> {
    fn lookup(&self, path: &str) -> Option<i64> {
        self.get(path).copied()
    }
}

impl DataContext for serde_json::Value {
    fn lookup(&self, path: &str) -> Option<i64> {
        let mut node = self;
        for segment in path.split('.') {
            node = match node {
                serde_json::Value::Object(map) => map.get(segment)?,
                serde_json::Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        match node.as_i64() {
            Some(value) => Some(value),
            // Whole floats are accepted; fractional or non-finite ones are not
            None => node
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64),
        }
    }
}

/// Reference to external data: `lookup(path) * multiplier + offset`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataRef {
    pub path: String,
    #[serde(default = "default_multiplier")]
    pub multiplier: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_multiplier() -> i64 {
    1
}

impl DataRef {
    pub fn new(path: impl Into<String>) -> Self {
        DataRef {
            path: path.into(),
            multiplier: 1,
            offset: 0,
        }
    }

    pub fn with_multiplier(mut self, multiplier: i64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// `None` when the path is missing or the arithmetic overflows
    pub fn resolve(&self, context: &dyn DataContext) -> Option<i64> {
        context
            .lookup(&self.path)?
            .checked_mul(self.multiplier)?
            .checked_add(self.offset)
    }
}

/// A modifier's value: constant, or computed from external data at resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModifierValue {
    Constant(i64),
    Derived(DataRef),
}

impl ModifierValue {
    pub fn resolve(&self, context: &dyn DataContext) -> Option<i64> {
        match self {
            ModifierValue::Constant(value) => Some(*value),
            ModifierValue::Derived(data) => data.resolve(context),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, ModifierValue::Constant(_))
    }
}

impl From<i64> for ModifierValue {
    fn from(value: i64) -> Self {
        ModifierValue::Constant(value)
    }
}
