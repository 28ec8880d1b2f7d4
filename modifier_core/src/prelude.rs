//! Prelude module for convenient imports
//!
//! ```rust
//! use modifier_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ability, ProficiencyRank, RollOptions};

// Predicates
pub use crate::predicate::{Predicate, Statement};

// Modifiers
pub use crate::modifier::{
    AbilityModifier, DataContext, DataRef, Modifier, ModifierOverride, ModifierType,
    ModifierValue, ProficiencyModifier,
};

// Statistics
pub use crate::statistic::{ResolvedModifier, StatisticModifier, StatisticModifierResult};

// IWR
pub use crate::iwr::{IwrDatum, IwrKind, IwrProfile, IwrRule, IwrRuleSet, IwrVocabulary};

// Sources
pub use crate::source::{BaseCheckSource, ModifierSource, RuleElementSource};

// Config
pub use crate::config::{default_labels, Labels};
