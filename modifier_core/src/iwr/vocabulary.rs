//! IwrVocabulary - Registry mapping IWR types to predicate statements

use crate::predicate::{Predicate, Statement};
use std::collections::HashMap;
use tracing::debug;

/// Maps each IWR type slug (`fire`, `silver`, `object-immunities`) to the
/// statements describing damage it applies to
#[derive(Debug, Clone, Default)]
pub struct IwrVocabulary {
    entries: HashMap<String, Vec<Statement>>,
}

impl IwrVocabulary {
    /// Create a new empty vocabulary
    pub fn new() -> Self {
        IwrVocabulary {
            entries: HashMap::new(),
        }
    }

    /// The bundled vocabulary (see `config/iwr_vocabulary.toml`)
    pub fn with_defaults() -> Self {
        crate::config::default_iwr_vocabulary()
    }

    /// Register (or replace) a type
    pub fn register(&mut self, iwr_type: impl Into<String>, statements: Vec<Statement>) {
        self.entries.insert(iwr_type.into(), statements);
    }

    pub fn contains(&self, iwr_type: &str) -> bool {
        self.entries.contains_key(iwr_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Statements for a type
    ///
    /// Unknown types describe as `unhandled:<type>`, which no roll option
    /// carries, so unrecognized content never applies.
    pub fn describe(&self, iwr_type: &str) -> Vec<Statement> {
        match self.entries.get(iwr_type) {
            Some(statements) => statements.clone(),
            None => {
                debug!(iwr_type, "unhandled IWR type");
                vec![Statement::Literal(format!("unhandled:{}", iwr_type))]
            }
        }
    }

    /// `describe(type)` AND none of `describe(exception)`
    pub fn predicate_for(&self, iwr_type: &str, exceptions: &[String]) -> Predicate {
        let mut predicate = Predicate::new(self.describe(iwr_type));
        let excluded: Vec<Statement> = exceptions.iter().flat_map(|e| self.describe(e)).collect();
        if !excluded.is_empty() {
            predicate.push(Statement::Nor(excluded));
        }
        predicate
    }

    /// Matches when any of the given types matches
    pub fn any_of(&self, iwr_types: &[String]) -> Predicate {
        let described = iwr_types.iter().flat_map(|t| self.describe(t)).collect();
        Predicate::new(vec![Statement::Or(described)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RollOptions;

    fn options(tags: &[&str]) -> RollOptions {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_unknown_type_never_matches() {
        let vocabulary = IwrVocabulary::new();
        assert_eq!(
            vocabulary.describe("vorpal"),
            vec![Statement::literal("unhandled:vorpal")]
        );
        let predicate = vocabulary.predicate_for("vorpal", &[]);
        assert!(!predicate.test(&options(&["damage", "damage:type:vorpal"])));
    }

    #[test]
    fn test_material_aliasing() {
        let vocabulary = IwrVocabulary::with_defaults();
        let silver = vocabulary.predicate_for("silver", &[]);
        assert!(silver.test(&options(&["damage:material:silver"])));
        assert!(silver.test(&options(&["damage:material:mithral"])));
        assert!(!silver.test(&options(&["damage:material:adamantine"])));

        let cold_iron = vocabulary.predicate_for("cold-iron", &[]);
        assert!(cold_iron.test(&options(&["damage:material:sovereign-steel"])));
    }

    #[test]
    fn test_exceptions_carve_out() {
        let vocabulary = IwrVocabulary::with_defaults();
        let predicate =
            vocabulary.predicate_for("physical", &["adamantine".to_string()]);

        assert!(predicate.test(&options(&["damage:type:slashing"])));
        assert!(!predicate.test(&options(&["damage:type:slashing", "damage:material:adamantine"])));
        assert!(!predicate.test(&options(&["damage:type:fire"])));
    }

    #[test]
    fn test_object_immunities_composite() {
        let vocabulary = IwrVocabulary::with_defaults();
        let predicate = vocabulary.predicate_for("object-immunities", &[]);
        assert!(predicate.test(&options(&["damage:type:mental"])));
        assert!(predicate.test(&options(&["condition:sickened"])));
        assert!(!predicate.test(&options(&["damage:type:fire"])));
    }

    #[test]
    fn test_trait_and_school_types() {
        let vocabulary = IwrVocabulary::with_defaults();
        assert!(vocabulary
            .predicate_for("visual", &[])
            .test(&options(&["item:trait:visual"])));
        assert!(vocabulary
            .predicate_for("enchantment", &[])
            .test(&options(&["item:trait:enchantment"])));
        assert!(vocabulary
            .predicate_for("elemental", &[])
            .test(&options(&["damage:type:electricity"])));
    }

    #[test]
    fn test_non_magical() {
        let vocabulary = IwrVocabulary::with_defaults();
        let predicate = vocabulary.predicate_for("non-magical", &[]);
        assert!(predicate.test(&options(&["damage", "damage:type:slashing"])));
        assert!(!predicate.test(&options(&["damage", "item:magical"])));
        // Needs an actual damage instance
        assert!(!predicate.test(&options(&["self:condition:prone"])));
    }
}
