use serde::{Deserialize, Serialize};

/// Where the overlap-avoidance jitter of a matrix point gets its seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JitterSource {
    /// 0-based position of the item in the input sequence.
    /// Reproducible only for a fixed ordering.
    #[default]
    Index,
    /// Hash of the item id. Stable across re-sorts of the collection.
    IdHash,
}

/// Prioritization matrix configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub jitter_source: JitterSource,
}
