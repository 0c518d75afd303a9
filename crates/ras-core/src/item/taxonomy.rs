//! Closed classification sets carried by every risk item.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::wire::WireEnum;

/// Building domain the item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Area {
    Structural,
    Systems,
    Regulatory,
    Insurance,
    Documentation,
}

impl WireEnum for Area {
    const FIELD: &'static str = "area";
    const ALL: &'static [Self] = &[
        Self::Structural,
        Self::Systems,
        Self::Regulatory,
        Self::Insurance,
        Self::Documentation,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Structural => "Structural",
            Self::Systems => "Systems",
            Self::Regulatory => "Regulatory",
            Self::Insurance => "Insurance",
            Self::Documentation => "Documentation",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display bucket for the estimated cost. Set by the caller, never derived from `cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CostRange {
    Low,
    Medium,
    High,
}

impl WireEnum for CostRange {
    const FIELD: &'static str = "costRange";
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for CostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Low => "€",
            Self::Medium => "€€",
            Self::High => "€€€",
        };
        f.write_str(symbol)
    }
}

/// Kind of legal exposure if the item is left unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LegalRisk {
    Criminal,
    Civil,
    Administrative,
    Property,
}

impl WireEnum for LegalRisk {
    const FIELD: &'static str = "legalRisk";
    const ALL: &'static [Self] = &[
        Self::Criminal,
        Self::Civil,
        Self::Administrative,
        Self::Property,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Criminal => "Criminal",
            Self::Civil => "Civil",
            Self::Administrative => "Administrative",
            Self::Property => "Property",
        }
    }
}

impl fmt::Display for LegalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse time horizon for the intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Urgency {
    Immediate,
    ShortTerm,
    MidTerm,
    LongTerm,
}

impl Urgency {
    /// Immediate or short term: the right half of the triage matrix (x above the midline).
    pub fn is_near_term(self) -> bool {
        matches!(self, Self::Immediate | Self::ShortTerm)
    }
}

impl WireEnum for Urgency {
    const FIELD: &'static str = "urgency";
    const ALL: &'static [Self] = &[
        Self::Immediate,
        Self::ShortTerm,
        Self::MidTerm,
        Self::LongTerm,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::ShortTerm => "ShortTerm",
            Self::MidTerm => "MidTerm",
            Self::LongTerm => "LongTerm",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Immediate => "Immediate",
            Self::ShortTerm => "Short term",
            Self::MidTerm => "Mid term",
            Self::LongTerm => "Long term",
        };
        f.write_str(label)
    }
}
