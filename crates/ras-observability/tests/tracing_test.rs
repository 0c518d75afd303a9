use ras_core::config::ObservabilityConfig;
use ras_observability::spans::names;
use ras_observability::{init_tracing, load_span, matrix_span, report_span, upsert_span};

#[test]
fn second_init_reports_existing_subscriber() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json_logs: true,
    };
    let first = init_tracing(&config);
    let second = init_tracing(&config);
    // Only one global subscriber can exist per process.
    assert!(!(first && second));
    assert!(!second);
}

#[test]
fn span_macros_use_the_named_constants() {
    let _ = init_tracing(&ObservabilityConfig::default());
    let spans = [
        load_span!("ras_collection"),
        upsert_span!("R1"),
        matrix_span!(12usize, "index"),
        report_span!("CouncilResolution", 12usize),
    ];
    let expected = [names::LOAD, names::UPSERT, names::MATRIX, names::REPORT];
    for (span, name) in spans.iter().zip(expected) {
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), name);
        }
    }
}
