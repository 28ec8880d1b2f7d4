//! ModifierSource - Trait and implementations for modifier providers

mod base_check;
mod rule_element;

pub use base_check::BaseCheckSource;
pub use rule_element::{RuleElementSource, RuleElementError};

use crate::modifier::Modifier;

/// Trait for anything that contributes modifiers to a statistic
pub trait ModifierSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    ///
    /// Order matters: name collisions keep the earliest modifier, and
    /// stacking ties go to the latest. Suggested priorities:
    /// - Base checks: -100
    /// - Rule elements: 0
    fn priority(&self) -> i32 {
        0
    }

    /// Append this source's modifiers
    fn apply(&self, modifiers: &mut Vec<Modifier>);
}
