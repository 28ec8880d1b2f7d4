//! Core types shared across the predicate, modifier and IWR subsystems

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of roll-option tags describing the current game state
///
/// Each tag is one true fact (e.g. `item:trait:fire`, `self:level:5`).
/// Membership is the only question predicates ask, except for numeric
/// comparisons which scan for `<prefix>:<integer>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollOptions(HashSet<String>);

impl RollOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        RollOptions(HashSet::new())
    }

    /// Add a tag, returning whether it was newly inserted
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Builder form of [`RollOptions::insert`]
    pub fn with(mut self, tag: impl Into<String>) -> Self {
        self.insert(tag);
        self
    }

    /// Remove a tag, returning whether it was present
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    /// Check whether a tag is set
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all tags (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Integer suffixes of every tag shaped `<prefix>:<integer>`
    ///
    /// `self:level:7` yields `7` for the prefix `self:level`.
    pub fn numeric_values<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = i64> + 'a {
        self.0.iter().filter_map(move |tag| {
            tag.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(':'))
                .and_then(|suffix| suffix.parse::<i64>().ok())
        })
    }
}

impl<S: Into<String>> FromIterator<S> for RollOptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        RollOptions(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for RollOptions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    /// Get all abilities
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Str,
            Ability::Dex,
            Ability::Con,
            Ability::Int,
            Ability::Wis,
            Ability::Cha,
        ]
    }

    /// Short slug, also used as the modifier name (`"dex"`)
    pub fn slug(self) -> &'static str {
        match self {
            Ability::Str => "str",
            Ability::Dex => "dex",
            Ability::Con => "con",
            Ability::Int => "int",
            Ability::Wis => "wis",
            Ability::Cha => "cha",
        }
    }
}

/// Proficiency tier, untrained through legendary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyRank {
    Untrained,
    Trained,
    Expert,
    Master,
    Legendary,
}

impl ProficiencyRank {
    /// Convert a numeric rank (0-4), `None` when out of range
    pub fn from_rank(rank: i64) -> Option<Self> {
        match rank {
            0 => Some(ProficiencyRank::Untrained),
            1 => Some(ProficiencyRank::Trained),
            2 => Some(ProficiencyRank::Expert),
            3 => Some(ProficiencyRank::Master),
            4 => Some(ProficiencyRank::Legendary),
            _ => None,
        }
    }

    /// Numeric rank (0-4)
    pub fn rank(self) -> i64 {
        self as i64
    }

    pub fn slug(self) -> &'static str {
        match self {
            ProficiencyRank::Untrained => "untrained",
            ProficiencyRank::Trained => "trained",
            ProficiencyRank::Expert => "expert",
            ProficiencyRank::Master => "master",
            ProficiencyRank::Legendary => "legendary",
        }
    }
}
