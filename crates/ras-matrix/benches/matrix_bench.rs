use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ras_core::config::JitterSource;
use ras_core::{Priority, RiskItem, Urgency};
use ras_matrix::MatrixEngine;
use test_fixtures::item;

/// 1K items spread across every urgency, priority, and cost decade.
fn build_register(n: usize) -> Vec<RiskItem> {
    let urgencies = [
        Urgency::Immediate,
        Urgency::ShortTerm,
        Urgency::MidTerm,
        Urgency::LongTerm,
    ];
    let priorities = [Priority::Critical, Priority::High, Priority::Moderate];
    (0..n)
        .map(|i| {
            item(&format!("R{i:04}"))
                .urgency(urgencies[i % urgencies.len()])
                .priority(priorities[i % priorities.len()])
                .cost(10f64.powi((i % 7) as i32) * 1.5)
                .build()
        })
        .collect()
}

fn bench_project_index(c: &mut Criterion) {
    let items = build_register(1_000);
    let engine = MatrixEngine::new();
    c.bench_function("matrix_project_1k_index", |b| {
        b.iter(|| engine.project(black_box(&items)));
    });
}

fn bench_project_id_hash(c: &mut Criterion) {
    let items = build_register(1_000);
    let engine = MatrixEngine::with_jitter_source(JitterSource::IdHash);
    c.bench_function("matrix_project_1k_id_hash", |b| {
        b.iter(|| engine.project(black_box(&items)));
    });
}

criterion_group!(benches, bench_project_index, bench_project_id_hash);
criterion_main!(benches);
