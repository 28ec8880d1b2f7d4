//! StatisticModifierResult - The output of statistic resolution

use crate::config::Labels;
use crate::modifier::{Modifier, ModifierType};
use serde::{Deserialize, Serialize};

/// Whether a resolved modifier reads as a bonus, a penalty, or a plain modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Bonus,
    Penalty,
    /// Ability and proficiency values, which are neither
    Modifier,
}

/// A modifier together with its resolved value and enabled flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModifier {
    pub modifier: Modifier,
    pub value: i64,
    pub enabled: bool,
}

impl ResolvedModifier {
    pub fn kind(&self) -> ModifierKind {
        match self.modifier.modifier_type {
            ModifierType::Ability | ModifierType::Proficiency => ModifierKind::Modifier,
            _ if self.value < 0 => ModifierKind::Penalty,
            _ => ModifierKind::Bonus,
        }
    }

    /// `"Dexterity +2"`
    pub fn label(&self, labels: &Labels) -> String {
        format!("{} {:+}", labels.modifier(&self.modifier.name), self.value)
    }
}

/// The modifiers of one statistic, annotated, plus their total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticModifierResult {
    pub slug: String,
    /// In input order, after name dedup
    pub modifiers: Vec<ResolvedModifier>,
    pub total: i64,
}

impl StatisticModifierResult {
    /// Entries counting toward the total
    pub fn enabled(&self) -> impl Iterator<Item = &ResolvedModifier> {
        self.modifiers.iter().filter(|e| e.enabled)
    }

    /// Entries that were gated out or lost on stacking
    pub fn disabled(&self) -> impl Iterator<Item = &ResolvedModifier> {
        self.modifiers.iter().filter(|e| !e.enabled)
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedModifier> {
        self.modifiers.iter().find(|e| e.modifier.name == name)
    }

    /// Difficulty class built from this statistic: `10 + total`
    pub fn dc(&self) -> i64 {
        self.total.saturating_add(10)
    }

    /// Display line of the enabled entries: `"Dexterity +2, Trained +5"`
    pub fn breakdown(&self, labels: &Labels) -> String {
        self.enabled()
            .map(|e| e.label(labels))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
