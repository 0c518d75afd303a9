//! Default values shared by the config sections.

use crate::constants;

pub const DEFAULT_DB_PATH: &str = "ras.db";
pub const DEFAULT_SLOT_NAME: &str = constants::DEFAULT_SLOT_NAME;
pub const DEFAULT_QUICK_WIN_COST_THRESHOLD: f64 = constants::QUICK_WIN_COST_THRESHOLD;
pub const DEFAULT_UPCOMING_DEADLINE_LIMIT: usize = constants::UPCOMING_DEADLINE_LIMIT;
pub const DEFAULT_LOG_LEVEL: &str = "info";
