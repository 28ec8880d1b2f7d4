//! IwrProfile - An entity's immunities, weaknesses and resistances applied to damage

use super::{IwrDatum, IwrError, IwrKind, IwrRule, IwrVocabulary};
use crate::types::RollOptions;
use serde::{Deserialize, Serialize};

/// Authored IWR data for one entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IwrRuleSet {
    #[serde(default)]
    pub immunities: Vec<IwrRule>,
    #[serde(default)]
    pub weaknesses: Vec<IwrRule>,
    #[serde(default)]
    pub resistances: Vec<IwrRule>,
}

/// One IWR entry that changed the damage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedIwr {
    pub kind: IwrKind,
    pub iwr_type: String,
    /// Signed change to the damage (weakness positive, resistance negative)
    pub adjustment: i64,
}

/// Result of running damage through a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IwrApplication {
    pub original: i64,
    pub adjusted: i64,
    pub applied: Vec<AppliedIwr>,
}

impl IwrApplication {
    pub fn is_immune(&self) -> bool {
        self.applied.iter().any(|a| a.kind == IwrKind::Immunity)
    }
}

/// The IWR data of one entity, rebuilt on every derived-data pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IwrProfile {
    immunities: Vec<IwrDatum>,
    weaknesses: Vec<IwrDatum>,
    resistances: Vec<IwrDatum>,
}

impl IwrProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every rule of a rule set; the first invalid rule fails the whole set
    pub fn from_rules(rules: IwrRuleSet, vocabulary: &IwrVocabulary) -> Result<Self, IwrError> {
        let mut profile = IwrProfile::new();
        let kinds = [
            (IwrKind::Immunity, rules.immunities),
            (IwrKind::Weakness, rules.weaknesses),
            (IwrKind::Resistance, rules.resistances),
        ];
        for (kind, list) in kinds {
            for rule in list {
                profile.push(IwrDatum::build(kind, rule, vocabulary)?);
            }
        }
        Ok(profile)
    }

    /// Add a datum to the list matching its kind
    pub fn push(&mut self, datum: IwrDatum) {
        match datum.kind() {
            IwrKind::Immunity => self.immunities.push(datum),
            IwrKind::Weakness => self.weaknesses.push(datum),
            IwrKind::Resistance => self.resistances.push(datum),
        }
    }

    pub fn immunities(&self) -> &[IwrDatum] {
        &self.immunities
    }

    pub fn weaknesses(&self) -> &[IwrDatum] {
        &self.weaknesses
    }

    pub fn resistances(&self) -> &[IwrDatum] {
        &self.resistances
    }

    /// Apply to one damage instance described by `options`
    ///
    /// - Any matching immunity reduces the damage to 0
    /// - Otherwise the single highest matching weakness is added
    /// - Then the single highest matching resistance (after doubling) is
    ///   subtracted, never below 0
    pub fn apply(&self, amount: i64, options: &RollOptions) -> IwrApplication {
        let original = amount.max(0);
        let mut applied = Vec::new();

        if let Some(immunity) = self.immunities.iter().find(|i| i.test(options)) {
            applied.push(AppliedIwr {
                kind: IwrKind::Immunity,
                iwr_type: immunity.iwr_type().to_string(),
                adjustment: -original,
            });
            return IwrApplication {
                original,
                adjusted: 0,
                applied,
            };
        }

        let mut adjusted = original;
        if original == 0 {
            return IwrApplication {
                original,
                adjusted,
                applied,
            };
        }

        let weakness = self
            .weaknesses
            .iter()
            .filter(|w| w.test(options))
            .max_by_key(|w| w.value());
        if let Some(weakness) = weakness {
            adjusted = adjusted.saturating_add(weakness.value());
            applied.push(AppliedIwr {
                kind: IwrKind::Weakness,
                iwr_type: weakness.iwr_type().to_string(),
                adjustment: weakness.value(),
            });
        }

        let resistance = self
            .resistances
            .iter()
            .filter(|r| r.test(options))
            .map(|r| (r, r.doubled_value(options)))
            .max_by_key(|(_, value)| *value);
        if let Some((resistance, value)) = resistance {
            let reduced = (adjusted - value).max(0);
            applied.push(AppliedIwr {
                kind: IwrKind::Resistance,
                iwr_type: resistance.iwr_type().to_string(),
                adjustment: reduced - adjusted,
            });
            adjusted = reduced;
        }

        IwrApplication {
            original,
            adjusted,
            applied,
        }
    }
}
