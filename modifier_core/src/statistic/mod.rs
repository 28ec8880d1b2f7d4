//! Statistic aggregation - Resolving a modifier list into a total
//!
//! Resolution steps:
//! 1. Modifiers sharing a name collapse to the first occurrence
//! 2. Manual overrides are kept as given; everything else is gated by its predicate
//! 3. Typed modifiers stack: best bonus and worst penalty per type (ties: later wins)
//! 4. Untyped modifiers always add
//! 5. The total is the sum of enabled values
//!
//! Resolution is pure: the same modifiers and roll options always produce the
//! same result, and the input modifiers are never mutated.

mod result;
mod stacking;

pub use result::{ModifierKind, ResolvedModifier, StatisticModifierResult};

use crate::modifier::{DataContext, EmptyContext, Modifier};
use crate::source::ModifierSource;
use crate::types::RollOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Resolve modifiers whose values are all constant
///
/// Deferred values resolve against an empty context (and so count as 0).
pub fn resolve(
    slug: &str,
    modifiers: &[Modifier],
    options: &RollOptions,
) -> StatisticModifierResult {
    resolve_with(slug, modifiers, options, &EmptyContext)
}

/// Resolve modifiers, looking deferred values up in `context`
pub fn resolve_with(
    slug: &str,
    modifiers: &[Modifier],
    options: &RollOptions,
    context: &dyn DataContext,
) -> StatisticModifierResult {
    let mut seen: HashSet<&str> = HashSet::with_capacity(modifiers.len());
    let mut entries = Vec::with_capacity(modifiers.len());

    for modifier in modifiers {
        if !seen.insert(modifier.name.as_str()) {
            continue;
        }

        let value = modifier.value.resolve(context).unwrap_or_else(|| {
            warn!(
                statistic = slug,
                modifier = %modifier.name,
                "could not resolve modifier value, using 0"
            );
            0
        });

        let enabled = match modifier.manual_override {
            Some(manual) => manual.is_enabled(),
            None => modifier.predicate.test(options),
        };

        entries.push(ResolvedModifier {
            modifier: modifier.clone(),
            value,
            enabled,
        });
    }

    stacking::apply_stacking_rules(&mut entries);

    let total = entries
        .iter()
        .filter(|e| e.enabled)
        .try_fold(0i64, |sum, e| sum.checked_add(e.value))
        .unwrap_or_else(|| {
            warn!(statistic = slug, "statistic total overflowed, using 0");
            0
        });
    StatisticModifierResult {
        slug: slug.to_string(),
        modifiers: entries,
        total,
    }
}

/// A named statistic (attack, save, skill) and the modifiers feeding it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticModifier {
    pub slug: String,
    #[serde(default)]
    modifiers: Vec<Modifier>,
}

impl StatisticModifier {
    pub fn new(slug: impl Into<String>, modifiers: Vec<Modifier>) -> Self {
        StatisticModifier {
            slug: slug.into(),
            modifiers,
        }
    }

    /// Collect modifiers from every source, lowest priority first
    pub fn from_sources(slug: impl Into<String>, sources: &[Box<dyn ModifierSource>]) -> Self {
        let mut sorted: Vec<_> = sources.iter().collect();
        sorted.sort_by_key(|s| s.priority());

        let mut modifiers = Vec::new();
        for source in sorted {
            source.apply(&mut modifiers);
        }
        Self::new(slug, modifiers)
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Append a modifier; name collisions are settled at resolution
    pub fn push(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Remove every modifier with this name, returning whether any existed
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.modifiers.len();
        self.modifiers.retain(|m| m.name != name);
        self.modifiers.len() != before
    }

    pub fn resolve(&self, options: &RollOptions) -> StatisticModifierResult {
        resolve(&self.slug, &self.modifiers, options)
    }

    pub fn resolve_with(
        &self,
        options: &RollOptions,
        context: &dyn DataContext,
    ) -> StatisticModifierResult {
        resolve_with(&self.slug, &self.modifiers, options, context)
    }
}
