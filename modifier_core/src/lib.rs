//! modifier_core - Roll-option predicates, modifier stacking and IWR resolution
//!
//! This library provides:
//! - Predicate: Boolean expressions over roll-option tags, authored as data
//! - Modifier: Typed, predicate-gated numeric adjustments
//! - StatisticModifier: Resolution of a modifier list into a total
//! - IwrDatum / IwrProfile: Immunities, weaknesses and resistances
//!
//! # Quick Start
//!
//! ```rust
//! use modifier_core::prelude::*;
//!
//! let modifiers = vec![
//!     AbilityModifier::from_score(Ability::Dex, 14),
//!     ProficiencyModifier::from_level_and_rank(3, 1),
//!     Modifier::new("Inspire Courage", ModifierType::Status, 1),
//!     Modifier::new("Heroism", ModifierType::Status, 2),
//! ];
//! let attack = StatisticModifier::new("attack", modifiers);
//! let result = attack.resolve(&RollOptions::new());
//! assert_eq!(result.total, 9);
//!
//! let vocabulary = IwrVocabulary::with_defaults();
//! let resistance = IwrDatum::build(
//!     IwrKind::Resistance,
//!     IwrRule::new("fire").with_value(5),
//!     &vocabulary,
//! )
//! .unwrap();
//! let tags = RollOptions::new().with("damage:type:fire");
//! assert!(resistance.test(&tags));
//! ```
//!
//! Resolution holds no global state: labels and the IWR vocabulary are loaded
//! through [`config`] and passed explicitly.

pub mod config;
pub mod iwr;
pub mod modifier;
pub mod predicate;
pub mod prelude;
pub mod source;
pub mod statistic;
pub mod types;

// Core API - what most users need
pub use iwr::{IwrDatum, IwrError, IwrKind, IwrProfile, IwrRule, IwrVocabulary};
pub use modifier::{AbilityModifier, Modifier, ModifierType, ModifierValue, ProficiencyModifier};
pub use predicate::{Predicate, PredicateError, Statement};
pub use statistic::{resolve, resolve_with, StatisticModifier, StatisticModifierResult};
pub use types::{Ability, ProficiencyRank, RollOptions};

// Configuration
pub use config::{default_iwr_vocabulary, default_labels, ConfigError, Labels};

// Advanced: Custom modifier sources
pub use source::ModifierSource;
