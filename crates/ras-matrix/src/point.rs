use serde::{Deserialize, Serialize};

use ras_core::{Priority, Urgency};

/// Plot position and marker style for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixPoint {
    pub id: String,
    pub title: String,
    /// Urgency axis, in `[5, 95]`.
    pub x: f64,
    /// Cost axis, in `[5, 95]`.
    pub y: f64,
    /// Marker weight.
    pub size: u32,
    /// Marker fill, as a hex color.
    pub color: String,
    /// `None` when the input carried a value outside the closed set.
    pub priority: Option<Priority>,
    pub urgency: Option<Urgency>,
}
