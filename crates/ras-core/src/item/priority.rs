use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::wire::WireEnum;

/// Remediation priority. Persisted as `"1"`, `"2"`, `"3"`.
/// Ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Priority {
    #[serde(rename = "1")]
    Critical,
    #[serde(rename = "2")]
    High,
    #[serde(rename = "3")]
    Moderate,
}

impl Priority {
    /// Numeric level, 1 = critical.
    pub fn level(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            Self::Moderate => 3,
        }
    }

    /// Short badge label, e.g. `P1`.
    pub fn badge(self) -> String {
        format!("P{}", self.level())
    }
}

impl WireEnum for Priority {
    const FIELD: &'static str = "priority";
    const ALL: &'static [Self] = &[Self::Critical, Self::High, Self::Moderate];

    fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "1",
            Self::High => "2",
            Self::Moderate => "3",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
        };
        f.write_str(label)
    }
}
