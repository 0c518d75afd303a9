//! Base placement on each axis, before jitter and clamping.

use ras_core::Urgency;

/// Lowest coordinate a point may take on either axis.
pub const PLOT_MIN: f64 = 5.0;
/// Highest coordinate a point may take on either axis.
pub const PLOT_MAX: f64 = 95.0;

/// Quadrant guide lines for renderers.
pub const MIDLINE_X: f64 = 50.0;
pub const MIDLINE_Y: f64 = 50.0;

/// x for an urgency outside the closed set.
pub const UNKNOWN_URGENCY_X: f64 = 10.0;

/// log10 of the cost mapped to the bottom of the cost scale (≈100).
pub const COST_LOG_MIN: f64 = 2.0;
/// log10 of the cost mapped to the top of the cost scale (≈100,000).
pub const COST_LOG_MAX: f64 = 5.0;
/// y for costs at or below the low anchor, and for zero/negative costs.
pub const COST_Y_FLOOR: f64 = 10.0;
/// y for a cost at the high anchor.
pub const COST_Y_CEILING: f64 = 90.0;

/// Ordinal urgency placement on a 0–100 scale.
pub fn urgency_x(urgency: Option<Urgency>) -> f64 {
    match urgency {
        Some(Urgency::Immediate) => 85.0,
        Some(Urgency::ShortTerm) => 65.0,
        Some(Urgency::MidTerm) => 35.0,
        Some(Urgency::LongTerm) => 15.0,
        None => UNKNOWN_URGENCY_X,
    }
}

/// Log-scaled cost placement.
///
/// Costs `<= 0` (and NaN) sit on the floor without taking a logarithm.
/// Costs above the high anchor exceed the ceiling; the final clamp bounds them.
pub fn cost_y(cost: f64) -> f64 {
    if cost.is_nan() || cost <= 0.0 {
        return COST_Y_FLOOR;
    }
    let log_cost = cost.log10().max(COST_LOG_MIN);
    COST_Y_FLOOR
        + (log_cost - COST_LOG_MIN) / (COST_LOG_MAX - COST_LOG_MIN) * (COST_Y_CEILING - COST_Y_FLOOR)
}

/// Keep a coordinate off the plot border.
pub fn clamp_to_plot(value: f64) -> f64 {
    value.clamp(PLOT_MIN, PLOT_MAX)
}
