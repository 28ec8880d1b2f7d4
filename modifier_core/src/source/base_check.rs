//! BaseCheckSource - Ability and proficiency modifiers for a check

use crate::modifier::{AbilityModifier, Modifier, ProficiencyModifier};
use crate::source::ModifierSource;
use crate::types::Ability;

/// The key ability and proficiency behind a check
pub struct BaseCheckSource {
    pub ability: Ability,
    pub score: i64,
    pub level: i64,
    /// Numeric proficiency rank (0-4); out-of-range ranks count as untrained
    pub rank: i64,
}

impl BaseCheckSource {
    /// Create a new base check source
    pub fn new(ability: Ability, score: i64, level: i64, rank: i64) -> Self {
        BaseCheckSource {
            ability,
            score,
            level,
            rank,
        }
    }
}

impl ModifierSource for BaseCheckSource {
    fn id(&self) -> &str {
        "base_check"
    }

    fn priority(&self) -> i32 {
        -100 // Base modifiers come first
    }

    fn apply(&self, modifiers: &mut Vec<Modifier>) {
        modifiers.push(AbilityModifier::from_score(self.ability, self.score));
        modifiers.push(ProficiencyModifier::from_level_and_rank(self.level, self.rank));
    }
}
