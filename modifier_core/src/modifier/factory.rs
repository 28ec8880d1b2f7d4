//! Factories for the modifiers every statistic starts from

use super::{Modifier, ModifierType};
use crate::types::{Ability, ProficiencyRank};
use tracing::warn;

/// Ability-score modifiers
pub struct AbilityModifier;

impl AbilityModifier {
    /// `floor((score - 10) / 2)`, named after the ability (`"dex"`)
    pub fn from_score(ability: Ability, score: i64) -> Modifier {
        Modifier::new(ability.slug(), ModifierType::Ability, Self::value_for(score))
    }

    /// The modifier value for a score, rounding toward negative infinity
    pub fn value_for(score: i64) -> i64 {
        score.saturating_sub(10).div_euclid(2)
    }
}

/// Proficiency modifiers
pub struct ProficiencyModifier;

impl ProficiencyModifier {
    /// `0` when untrained, otherwise `level + 2 * rank`
    ///
    /// A rank outside 0-4 is treated as untrained with a warning rather than
    /// an error, since this runs on every derived-data pass.
    pub fn from_level_and_rank(level: i64, rank: i64) -> Modifier {
        let rank = ProficiencyRank::from_rank(rank).unwrap_or_else(|| {
            warn!(rank, level, "invalid proficiency rank, treating as untrained");
            ProficiencyRank::Untrained
        });
        Self::from_level_and_proficiency(level, rank)
    }

    /// Typed form of [`ProficiencyModifier::from_level_and_rank`]
    pub fn from_level_and_proficiency(level: i64, rank: ProficiencyRank) -> Modifier {
        let value = match rank {
            ProficiencyRank::Untrained => 0,
            trained => level.saturating_add(trained.rank() * 2),
        };
        Modifier::new(rank.slug(), ModifierType::Proficiency, value)
    }
}
