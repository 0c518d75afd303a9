/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cost above which an urgent item counts as a priority investment rather than a quick win.
pub const QUICK_WIN_COST_THRESHOLD: f64 = 5_000.0;

/// Number of rows in the upcoming-deadlines list.
pub const UPCOMING_DEADLINE_LIMIT: usize = 5;

/// Default name of the durable storage slot holding the collection.
pub const DEFAULT_SLOT_NAME: &str = "ras_collection";

/// Compliance score above which the register counts as healthy.
pub const HEALTHY_COMPLIANCE_SCORE: u32 = 80;
