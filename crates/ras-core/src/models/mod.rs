mod dashboard_metrics;

pub use dashboard_metrics::DashboardMetrics;
