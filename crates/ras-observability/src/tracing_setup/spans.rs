//! Span definitions per operation: load, upsert, matrix projection, report selection.
//!
//! Each span carries the operation's key metadata via the `tracing` crate.

/// Create a collection load span.
#[macro_export]
macro_rules! load_span {
    ($slot:expr) => {
        tracing::info_span!("ras.load", slot = %$slot)
    };
}

/// Create an upsert span.
#[macro_export]
macro_rules! upsert_span {
    ($item_id:expr) => {
        tracing::info_span!("ras.upsert", item_id = %$item_id)
    };
}

/// Create a matrix projection span.
#[macro_export]
macro_rules! matrix_span {
    ($item_count:expr, $jitter:expr) => {
        tracing::debug_span!("ras.matrix", item_count = $item_count, jitter = ?$jitter)
    };
}

/// Create a report selection span.
#[macro_export]
macro_rules! report_span {
    ($kind:expr, $item_count:expr) => {
        tracing::debug_span!("ras.report", kind = ?$kind, item_count = $item_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LOAD: &str = "ras.load";
    pub const UPSERT: &str = "ras.upsert";
    pub const MATRIX: &str = "ras.matrix";
    pub const REPORT: &str = "ras.report";
}
