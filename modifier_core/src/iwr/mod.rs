//! IWR - Immunities, weaknesses and resistances
//!
//! Each datum is built once from authored rule data and a vocabulary. Its
//! predicates are fixed at construction, so testing against damage tags
//! needs nothing but the tags.

mod profile;
mod vocabulary;

pub use profile::{AppliedIwr, IwrApplication, IwrProfile, IwrRuleSet};
pub use vocabulary::IwrVocabulary;

use crate::config::Labels;
use crate::predicate::Predicate;
use crate::types::RollOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// IWR construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IwrError {
    #[error("{kind:?} to `{iwr_type}` has no value")]
    MissingValue { kind: IwrKind, iwr_type: String },
    #[error("{kind:?} to `{iwr_type}` has negative value {value}")]
    NegativeValue {
        kind: IwrKind,
        iwr_type: String,
        value: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IwrKind {
    Immunity,
    Weakness,
    Resistance,
}

impl IwrKind {
    pub fn slug(self) -> &'static str {
        match self {
            IwrKind::Immunity => "immunity",
            IwrKind::Weakness => "weakness",
            IwrKind::Resistance => "resistance",
        }
    }
}

/// Authored IWR rule data, as found on items and effects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IwrRule {
    #[serde(rename = "type")]
    pub iwr_type: String,
    #[serde(default)]
    pub exceptions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, rename = "doubleVs", alias = "double_vs")]
    pub double_vs: Vec<String>,
}

impl IwrRule {
    pub fn new(iwr_type: impl Into<String>) -> Self {
        IwrRule {
            iwr_type: iwr_type.into(),
            exceptions: Vec::new(),
            source: None,
            value: None,
            double_vs: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = exceptions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_double_vs<I, S>(mut self, double_vs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.double_vs = double_vs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// One resolved immunity, weakness or resistance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IwrDatum {
    kind: IwrKind,
    iwr_type: String,
    exceptions: Vec<String>,
    source: Option<String>,
    value: Option<i64>,
    double_vs: Vec<String>,
    predicate: Predicate,
    double_predicate: Option<Predicate>,
}

impl IwrDatum {
    /// Build a datum, fixing its predicates against `vocabulary`
    ///
    /// Weaknesses and resistances need a non-negative value. Immunities
    /// carry none, and only resistances may double.
    pub fn build(
        kind: IwrKind,
        rule: IwrRule,
        vocabulary: &IwrVocabulary,
    ) -> Result<Self, IwrError> {
        let value = match kind {
            IwrKind::Immunity => None,
            IwrKind::Weakness | IwrKind::Resistance => {
                let value = rule.value.ok_or_else(|| IwrError::MissingValue {
                    kind,
                    iwr_type: rule.iwr_type.clone(),
                })?;
                if value < 0 {
                    return Err(IwrError::NegativeValue {
                        kind,
                        iwr_type: rule.iwr_type,
                        value,
                    });
                }
                Some(value)
            }
        };

        let double_vs = match kind {
            IwrKind::Resistance => rule.double_vs,
            _ => {
                if !rule.double_vs.is_empty() {
                    warn!(
                        kind = kind.slug(),
                        iwr_type = %rule.iwr_type,
                        "doubleVs only applies to resistances, ignoring"
                    );
                }
                Vec::new()
            }
        };

        let predicate = vocabulary.predicate_for(&rule.iwr_type, &rule.exceptions);
        let double_predicate = if double_vs.is_empty() {
            None
        } else {
            Some(vocabulary.any_of(&double_vs))
        };

        Ok(IwrDatum {
            kind,
            iwr_type: rule.iwr_type,
            exceptions: rule.exceptions,
            source: rule.source,
            value,
            double_vs,
            predicate,
            double_predicate,
        })
    }

    pub fn kind(&self) -> IwrKind {
        self.kind
    }

    pub fn iwr_type(&self) -> &str {
        &self.iwr_type
    }

    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn double_vs(&self) -> &[String] {
        &self.double_vs
    }

    /// Magnitude; immunities have none and report 0
    pub fn value(&self) -> i64 {
        self.value.unwrap_or(0)
    }

    /// The type's description AND none of the exceptions
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Whether this entry applies to damage carrying these tags
    pub fn test(&self, options: &RollOptions) -> bool {
        self.predicate.test(options)
    }

    /// The value, doubled when a `doubleVs` type matches
    pub fn doubled_value(&self, options: &RollOptions) -> i64 {
        match &self.double_predicate {
            Some(predicate) if predicate.test(options) => self.value().saturating_mul(2),
            _ => self.value(),
        }
    }

    /// `"Fire 5 (except Persistent; double vs. Good)"`
    pub fn label(&self, labels: &Labels) -> String {
        let mut label = labels.iwr_type(&self.iwr_type);
        if let Some(value) = self.value {
            label.push_str(&format!(" {}", value));
        }

        let mut notes = Vec::new();
        if !self.exceptions.is_empty() {
            let names: Vec<_> = self.exceptions.iter().map(|e| labels.iwr_type(e)).collect();
            notes.push(format!("except {}", names.join(", ")));
        }
        if !self.double_vs.is_empty() {
            let names: Vec<_> = self.double_vs.iter().map(|d| labels.iwr_type(d)).collect();
            notes.push(format!("double vs. {}", names.join(", ")));
        }
        if !notes.is_empty() {
            label.push_str(&format!(" ({})", notes.join("; ")));
        }
        label
    }
}
