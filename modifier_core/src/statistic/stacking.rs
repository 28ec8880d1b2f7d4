//! Stacking rules for typed bonuses and penalties
//!
//! Within one modifier type, only the highest bonus and the lowest penalty
//! count. A zero value competes as a bonus. Ties go to the later entry.
//! Untyped and manually overridden entries are left untouched.

use super::ResolvedModifier;
use crate::modifier::ModifierType;
use std::collections::HashMap;
use tracing::trace;

/// Disable every typed entry that loses to a better one of the same type and sign
///
/// Only entries currently enabled take part, so predicate failures must be
/// applied before this runs.
pub(crate) fn apply_stacking_rules(entries: &mut [ResolvedModifier]) {
    // (type, is_bonus) -> index of the current best entry
    let mut best: HashMap<(ModifierType, bool), usize> = HashMap::new();

    for index in 0..entries.len() {
        let entry = &entries[index];
        if !entry.enabled
            || entry.modifier.manual_override.is_some()
            || !entry.modifier.modifier_type.stacks_exclusively()
        {
            continue;
        }

        let is_bonus = entry.value >= 0;
        let key = (entry.modifier.modifier_type, is_bonus);
        let value = entry.value;

        match best.get(&key).copied() {
            None => {
                best.insert(key, index);
            }
            Some(current) => {
                let current_value = entries[current].value;
                let replaces = if is_bonus {
                    value >= current_value
                } else {
                    value <= current_value
                };

                let loser = if replaces {
                    best.insert(key, index);
                    current
                } else {
                    index
                };
                trace!(
                    loser = %entries[loser].modifier.name,
                    modifier_type = entries[loser].modifier.modifier_type.slug(),
                    "modifier suppressed by stacking"
                );
                entries[loser].enabled = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{Modifier, ModifierOverride};

    fn entry(name: &str, modifier_type: ModifierType, value: i64) -> ResolvedModifier {
        ResolvedModifier {
            modifier: Modifier::new(name, modifier_type, value),
            value,
            enabled: true,
        }
    }

    fn enabled_names(entries: &[ResolvedModifier]) -> Vec<&str> {
        entries
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.modifier.name.as_str())
            .collect()
    }

    #[test]
    fn test_highest_bonus_wins() {
        let mut entries = vec![
            entry("a", ModifierType::Item, 1),
            entry("b", ModifierType::Item, 3),
            entry("c", ModifierType::Item, 2),
        ];
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["b"]);
    }

    #[test]
    fn test_lowest_penalty_wins() {
        let mut entries = vec![
            entry("a", ModifierType::Status, -1),
            entry("b", ModifierType::Status, -3),
            entry("c", ModifierType::Status, -2),
        ];
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["b"]);
    }

    #[test]
    fn test_bonus_and_penalty_coexist() {
        let mut entries = vec![
            entry("bonus", ModifierType::Circumstance, 2),
            entry("penalty", ModifierType::Circumstance, -1),
        ];
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["bonus", "penalty"]);
    }

    #[test]
    fn test_ties_go_to_later_entry() {
        let mut entries = vec![
            entry("first", ModifierType::Status, 2),
            entry("second", ModifierType::Status, 2),
            entry("first-penalty", ModifierType::Status, -1),
            entry("second-penalty", ModifierType::Status, -1),
        ];
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["second", "second-penalty"]);
    }

    #[test]
    fn test_types_are_independent() {
        let mut entries = vec![
            entry("item", ModifierType::Item, 1),
            entry("status", ModifierType::Status, 1),
        ];
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["item", "status"]);
    }

    #[test]
    fn test_untyped_always_stacks() {
        let mut entries = vec![
            entry("a", ModifierType::Untyped, 1),
            entry("b", ModifierType::Untyped, 1),
            entry("c", ModifierType::Untyped, -2),
        ];
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_disabled_entries_do_not_compete() {
        let mut entries = vec![
            entry("gated-out", ModifierType::Item, 5),
            entry("live", ModifierType::Item, 1),
        ];
        entries[0].enabled = false;
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["live"]);
    }

    #[test]
    fn test_overridden_entries_are_left_alone() {
        let mut forced = entry("forced", ModifierType::Item, 1);
        forced.modifier = forced.modifier.with_override(ModifierOverride::Enabled);
        let mut entries = vec![forced, entry("better", ModifierType::Item, 3)];
        apply_stacking_rules(&mut entries);
        assert_eq!(enabled_names(&entries), vec!["forced", "better"]);
    }
}
