//! Predicate engine - Boolean expressions over roll-option tags
//!
//! A [`Predicate`] is a list of [`Statement`]s that must all hold. Statements
//! are authored as data in one of two vocabularies:
//!
//! - Modern: `["self:armored", {"or": ["item:trait:fire", {"not": "target:immune"}]}]`
//! - Legacy: `{"all": ["self:armored"], "any": [...], "not": [...]}`
//!
//! Both are parsed into the same AST and validated at construction, so
//! evaluation itself can never fail.

mod parse;

use crate::types::RollOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Predicate construction error
#[derive(Error, Debug)]
pub enum PredicateError {
    #[error("Invalid predicate statement `{statement}`: {reason}")]
    InvalidShape { statement: String, reason: String },
    #[error("Failed to parse predicate JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Numeric comparison operators for `<prefix>:<integer>` tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
}

impl CompareOp {
    /// Operator key as authored (`"gte"`)
    pub fn key(self) -> &'static str {
        match self {
            CompareOp::Gt => "gt",
            CompareOp::Gte => "gte",
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
            CompareOp::Eq => "eq",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gt" => Some(CompareOp::Gt),
            "gte" => Some(CompareOp::Gte),
            "lt" => Some(CompareOp::Lt),
            "lte" => Some(CompareOp::Lte),
            "eq" => Some(CompareOp::Eq),
            _ => None,
        }
    }

    fn holds(self, left: i64, right: i64) -> bool {
        match self {
            CompareOp::Gt => left > right,
            CompareOp::Gte => left >= right,
            CompareOp::Lt => left < right,
            CompareOp::Lte => left <= right,
            CompareOp::Eq => left == right,
        }
    }
}

/// One node of a predicate tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Statement {
    /// True iff the tag is present
    Literal(String),
    /// True iff every child holds (empty: true)
    And(Vec<Statement>),
    /// True iff any child holds (empty: false)
    Or(Vec<Statement>),
    /// True iff the child does not hold
    Not(Box<Statement>),
    /// True iff no child holds
    Nor(Vec<Statement>),
    /// True iff not every child holds
    Nand(Vec<Statement>),
    /// True iff exactly one child holds
    Xor(Vec<Statement>),
    /// True iff some `<prefix>:<v>` tag satisfies `v op value`
    Compare {
        op: CompareOp,
        prefix: String,
        value: i64,
    },
}

impl Statement {
    pub fn literal(tag: impl Into<String>) -> Self {
        Statement::Literal(tag.into())
    }

    pub fn not(statement: Statement) -> Self {
        Statement::Not(Box::new(statement))
    }

    /// Parse a single statement from authored JSON
    pub fn from_value(value: &serde_json::Value) -> Result<Self, PredicateError> {
        parse::parse_statement(value)
    }

    /// Evaluate against a tag set
    pub fn test(&self, options: &RollOptions) -> bool {
        match self {
            Statement::Literal(tag) => options.contains(tag),
            Statement::And(children) => children.iter().all(|c| c.test(options)),
            Statement::Or(children) => children.iter().any(|c| c.test(options)),
            Statement::Not(child) => !child.test(options),
            Statement::Nor(children) => !children.iter().any(|c| c.test(options)),
            Statement::Nand(children) => !children.iter().all(|c| c.test(options)),
            Statement::Xor(children) => children.iter().filter(|c| c.test(options)).count() == 1,
            Statement::Compare { op, prefix, value } => options
                .numeric_values(prefix)
                .any(|found| op.holds(found, *value)),
        }
    }
}

impl TryFrom<serde_json::Value> for Statement {
    type Error = PredicateError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        parse::parse_statement(&value)
    }
}

impl From<Statement> for serde_json::Value {
    fn from(statement: Statement) -> Self {
        parse::statement_to_value(&statement)
    }
}

/// A list of statements that must all hold
///
/// An empty predicate always passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub struct Predicate {
    statements: Vec<Statement>,
}

impl Predicate {
    pub fn new(statements: Vec<Statement>) -> Self {
        Predicate { statements }
    }

    /// A predicate requiring every given tag
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::new(tags.into_iter().map(Statement::literal).collect())
    }

    /// Parse authored content in either vocabulary
    ///
    /// `null` is accepted as the empty predicate.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, PredicateError> {
        parse::parse_predicate(value).map(Predicate::new)
    }

    /// Parse authored content from a JSON string
    pub fn from_json(json: &str) -> Result<Self, PredicateError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Append a statement (AND'ed with the existing ones)
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Evaluate against a tag set
    pub fn test(&self, options: &RollOptions) -> bool {
        self.statements.iter().all(|s| s.test(options))
    }
}

impl TryFrom<serde_json::Value> for Predicate {
    type Error = PredicateError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Predicate::from_value(&value)
    }
}

impl From<Predicate> for serde_json::Value {
    fn from(predicate: Predicate) -> Self {
        serde_json::Value::Array(
            predicate
                .statements
                .iter()
                .map(parse::statement_to_value)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(tags: &[&str]) -> RollOptions {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_empty_predicate_always_passes() {
        let predicate = Predicate::default();
        assert!(predicate.test(&RollOptions::new()));
        assert!(predicate.test(&options(&["anything"])));
    }

    #[test]
    fn test_literal() {
        let predicate = Predicate::from_tags(["item:trait:fire"]);
        assert!(predicate.test(&options(&["item:trait:fire"])));
        assert!(!predicate.test(&options(&["item:trait:cold"])));
    }

    #[test]
    fn test_top_level_statements_are_anded() {
        let predicate = Predicate::from_tags(["a", "b"]);
        assert!(predicate.test(&options(&["a", "b", "c"])));
        assert!(!predicate.test(&options(&["a"])));
    }

    #[test]
    fn test_and_or_empty_lists() {
        let none = RollOptions::new();
        assert!(Statement::And(vec![]).test(&none));
        assert!(!Statement::Or(vec![]).test(&none));
        assert!(Statement::Nor(vec![]).test(&none));
    }

    #[test]
    fn test_not_and_nor() {
        let not_a = Statement::not(Statement::literal("a"));
        assert!(not_a.test(&options(&["b"])));
        assert!(!not_a.test(&options(&["a"])));

        let nor = Statement::Nor(vec![Statement::literal("a"), Statement::literal("b")]);
        assert!(nor.test(&options(&["c"])));
        assert!(!nor.test(&options(&["b"])));
    }

    #[test]
    fn test_nand_and_xor() {
        let children = vec![Statement::literal("a"), Statement::literal("b")];
        let nand = Statement::Nand(children.clone());
        let xor = Statement::Xor(children);

        assert!(!nand.test(&options(&["a", "b"])));
        assert!(nand.test(&options(&["a"])));

        assert!(xor.test(&options(&["a"])));
        assert!(!xor.test(&options(&["a", "b"])));
        assert!(!xor.test(&options(&[])));
    }

    #[test]
    fn test_nested_combination() {
        // self:armored AND (fire OR (cold AND NOT resist))
        let predicate = Predicate::new(vec![
            Statement::literal("self:armored"),
            Statement::Or(vec![
                Statement::literal("fire"),
                Statement::And(vec![
                    Statement::literal("cold"),
                    Statement::not(Statement::literal("resist")),
                ]),
            ]),
        ]);

        assert!(predicate.test(&options(&["self:armored", "fire"])));
        assert!(predicate.test(&options(&["self:armored", "cold"])));
        assert!(!predicate.test(&options(&["self:armored", "cold", "resist"])));
        assert!(!predicate.test(&options(&["fire"])));
    }

    #[test]
    fn test_numeric_comparison() {
        let gte = Statement::Compare {
            op: CompareOp::Gte,
            prefix: "self:level".to_string(),
            value: 5,
        };
        assert!(gte.test(&options(&["self:level:5"])));
        assert!(gte.test(&options(&["self:level:9"])));
        assert!(!gte.test(&options(&["self:level:4"])));
        // No matching tag at all
        assert!(!gte.test(&options(&["target:level:9"])));
    }
}
