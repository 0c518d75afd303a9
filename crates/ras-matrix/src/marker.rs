//! Marker size and color tiers, driven only by priority.

use ras_core::Priority;

/// Marker weight for a priority. Unknown priorities take the smallest tier.
pub fn size(priority: Option<Priority>) -> u32 {
    match priority {
        Some(Priority::Critical) => 400,
        Some(Priority::High) => 200,
        Some(Priority::Moderate) | None => 100,
    }
}

/// Marker color for a priority. Unknown priorities take the moderate color.
pub fn color(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::Critical) => "#EF4444",
        Some(Priority::High) => "#F97316",
        Some(Priority::Moderate) | None => "#EAB308",
    }
}
