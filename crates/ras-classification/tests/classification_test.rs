use proptest::prelude::*;
use ras_classification::deadlines::{by_deadline, upcoming_deadlines};
use ras_classification::metrics::*;
use ras_classification::quadrants::{is_priority_investment, is_quick_win};
use ras_classification::{BoardFilter, ClassificationEngine, Quadrant, QuadrantBuckets};
use ras_core::config::ClassificationConfig;
use ras_core::{Area, Priority, RiskItem, Status, Urgency};
use test_fixtures::item;

fn ids(items: &[&RiskItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

// ── Golden register ──────────────────────────────────────────────────────

#[test]
fn golden_register_metrics() {
    let golden = test_fixtures::register_sample();
    let engine = ClassificationEngine::new();
    assert_eq!(engine.metrics(&golden.items), golden.expected.metrics);
}

#[test]
fn golden_register_buckets() {
    let golden = test_fixtures::register_sample();
    let buckets = ClassificationEngine::new().buckets(&golden.items);
    assert_eq!(ids(&buckets.priority_investments), golden.expected.priority_investments);
    assert_eq!(ids(&buckets.quick_wins), golden.expected.quick_wins);
    assert_eq!(ids(&buckets.strategic), golden.expected.strategic);
}

#[test]
fn golden_register_status_and_area_breakdown() {
    let golden = test_fixtures::register_sample();
    let dist = status_distribution(&golden.items);
    assert_eq!(dist.len(), 3);
    assert_eq!((dist[0].status, dist[0].count), (Status::Completed, golden.expected.status_counts.completed));
    assert_eq!((dist[1].status, dist[1].count), (Status::InProgress, golden.expected.status_counts.in_progress));
    assert_eq!((dist[2].status, dist[2].count), (Status::NotStarted, golden.expected.status_counts.not_started));

    let budgets: Vec<(Area, f64)> = budget_by_area(&golden.items)
        .into_iter()
        .map(|b| (b.area, b.total))
        .collect();
    assert_eq!(budgets, golden.expected.budget_by_area);
}

#[test]
fn golden_register_upcoming_deadlines() {
    let golden = test_fixtures::register_sample();
    let upcoming = ClassificationEngine::new().upcoming_deadlines(&golden.items);
    assert_eq!(ids(&upcoming), golden.expected.upcoming_deadlines);
}

#[test]
fn dashboard_view_bundles_every_breakdown() {
    let golden = test_fixtures::register_sample();
    let view = ClassificationEngine::new().dashboard(&golden.items);
    assert_eq!(view.metrics, golden.expected.metrics);
    assert_eq!(view.status_distribution.len(), 3);
    assert_eq!(view.budget_by_area.len(), 5);
    assert_eq!(view.upcoming_deadlines.len(), 5);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["metrics"]["complianceScore"], 25);
    assert_eq!(json["upcomingDeadlines"][0]["id"], "R02");
    assert_eq!(json["statusDistribution"][0]["color"], "#10B981");
}

// ── Worked examples ──────────────────────────────────────────────────────

#[test]
fn compliance_score_of_two_completed_out_of_four_is_50() {
    let items = vec![
        item("A").status(Status::Completed).build(),
        item("B").status(Status::Completed).build(),
        item("C").status(Status::InProgress).build(),
        item("D").status(Status::NotStarted).build(),
    ];
    assert_eq!(compliance_score(&items), Some(50));
}

#[test]
fn compliance_score_rounds_to_nearest() {
    let items = vec![
        item("A").status(Status::Completed).build(),
        item("B").build(),
        item("C").build(),
    ];
    // 33.33...
    assert_eq!(compliance_score(&items), Some(33));
    let items = vec![
        item("A").status(Status::Completed).build(),
        item("B").status(Status::Completed).build(),
        item("C").build(),
    ];
    // 66.66...
    assert_eq!(compliance_score(&items), Some(67));
}

#[test]
fn empty_collection_has_no_compliance_score() {
    assert_eq!(compliance_score(&[]), None);
    let metrics = dashboard_metrics(&[]);
    assert!(metrics.is_empty());
    assert_eq!(metrics.compliance_score, None);
    assert_eq!(metrics.total_budget, 0.0);
}

#[test]
fn upcoming_deadlines_excludes_completed_and_sorts_ascending() {
    let items = vec![
        item("A").deadline("2025-01-10").status(Status::InProgress).build(),
        item("B").deadline("2025-01-05").status(Status::Completed).build(),
        item("C").deadline("2025-02-01").status(Status::NotStarted).build(),
    ];
    assert_eq!(ids(&upcoming_deadlines(&items, 5)), vec!["A", "C"]);
}

#[test]
fn upcoming_deadlines_ties_keep_collection_order_and_truncate() {
    let items: Vec<RiskItem> = ["E", "D", "C", "B", "A", "F"]
        .iter()
        .map(|id| item(id).deadline("2025-05-01").build())
        .collect();
    assert_eq!(ids(&upcoming_deadlines(&items, 5)), vec!["E", "D", "C", "B", "A"]);
}

#[test]
fn by_deadline_is_stable() {
    let items = vec![
        item("late").deadline("2026-01-01").build(),
        item("tie-1").deadline("2025-01-01").build(),
        item("tie-2").deadline("2025-01-01").build(),
    ];
    assert_eq!(ids(&by_deadline(&items)), vec!["tie-1", "tie-2", "late"]);
}

#[test]
fn budget_by_area_uses_first_occurrence_order() {
    let items = vec![
        item("1").area(Area::Systems).cost(10.0).build(),
        item("2").area(Area::Documentation).cost(5.0).build(),
        item("3").area(Area::Systems).cost(2.5).build(),
    ];
    let budgets = budget_by_area(&items);
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets[0], AreaBudget { area: Area::Systems, total: 12.5 });
    assert_eq!(budgets[1], AreaBudget { area: Area::Documentation, total: 5.0 });
}

#[test]
fn threshold_cost_is_a_quick_win() {
    let at = item("at").urgency(Urgency::Immediate).cost(5_000.0).build();
    let above = item("above").urgency(Urgency::ShortTerm).cost(5_000.01).build();
    assert!(is_quick_win(&at, 5_000.0));
    assert!(!is_priority_investment(&at, 5_000.0));
    assert!(is_priority_investment(&above, 5_000.0));
}

#[test]
fn strategic_ignores_cost() {
    let cheap = item("c").urgency(Urgency::LongTerm).cost(0.0).build();
    let costly = item("x").urgency(Urgency::MidTerm).cost(1.0e6).build();
    for i in [&cheap, &costly] {
        assert!(Quadrant::Strategic.contains(i, 5_000.0));
        assert!(!Quadrant::QuickWin.contains(i, 5_000.0));
        assert!(!Quadrant::PriorityInvestment.contains(i, 5_000.0));
    }
}

#[test]
fn configured_threshold_moves_items_between_buckets() {
    let items = vec![item("a").urgency(Urgency::Immediate).cost(3_000.0).build()];
    let strict = ClassificationEngine::from_config(&ClassificationConfig {
        quick_win_cost_threshold: 1_000.0,
        upcoming_deadline_limit: 5,
    });
    assert_eq!(strict.buckets(&items).bucket(Quadrant::PriorityInvestment).len(), 1);
    assert!(ClassificationEngine::new().buckets(&items).priority_investments.is_empty());
}

#[test]
fn critical_count_counts_priority_one() {
    let items = vec![
        item("a").priority(Priority::Critical).build(),
        item("b").priority(Priority::High).build(),
        item("c").priority(Priority::Critical).build(),
    ];
    assert_eq!(critical_count(&items), 2);
}

// ── Board filter ─────────────────────────────────────────────────────────

#[test]
fn unrestricted_filter_passes_everything() {
    let golden = test_fixtures::register_sample();
    let filter = BoardFilter::new();
    assert!(filter.is_unrestricted());
    assert_eq!(filter.apply(&golden.items).len(), golden.items.len());
}

#[test]
fn filter_selectors_combine_with_and() {
    let golden = test_fixtures::register_sample();
    let filter = BoardFilter::new()
        .with_area(Area::Structural)
        .with_status(Status::InProgress);
    assert_eq!(ids(&filter.apply(&golden.items)), vec!["R01", "R06"]);

    let filter = filter.with_priority(Priority::High);
    assert_eq!(ids(&filter.apply(&golden.items)), vec!["R06"]);

    let none = BoardFilter::new().with_area(Area::Insurance).with_status(Status::Completed);
    assert!(none.apply(&golden.items).is_empty());
}

// ── Properties ───────────────────────────────────────────────────────────

fn arb_urgency() -> impl Strategy<Value = Urgency> {
    prop_oneof![
        Just(Urgency::Immediate),
        Just(Urgency::ShortTerm),
        Just(Urgency::MidTerm),
        Just(Urgency::LongTerm),
    ]
}

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::NotStarted),
        Just(Status::InProgress),
        Just(Status::Completed),
    ]
}

proptest! {
    #[test]
    fn quick_wins_and_priority_investments_are_disjoint(
        specs in prop::collection::vec((arb_urgency(), 0.0f64..200_000.0), 0..40),
        threshold in 0.0f64..20_000.0,
    ) {
        let items: Vec<RiskItem> = specs
            .iter()
            .enumerate()
            .map(|(i, (urgency, cost))| item(&i.to_string()).urgency(*urgency).cost(*cost).build())
            .collect();
        let buckets = QuadrantBuckets::partition(&items, threshold);
        for i in &buckets.quick_wins {
            prop_assert!(!buckets.priority_investments.iter().any(|p| p.id == i.id));
        }
        // Every typed item lands in exactly one bucket.
        let total = buckets.quick_wins.len() + buckets.priority_investments.len() + buckets.strategic.len();
        prop_assert_eq!(total, items.len());
    }

    #[test]
    fn status_distribution_sums_to_collection_size(
        statuses in prop::collection::vec(arb_status(), 0..40),
    ) {
        let items: Vec<RiskItem> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| item(&i.to_string()).status(*s).build())
            .collect();
        let sum: usize = status_distribution(&items).iter().map(|s| s.count).sum();
        prop_assert_eq!(sum, items.len());
        if let Some(score) = compliance_score(&items) {
            prop_assert!(score <= 100);
        } else {
            prop_assert!(items.is_empty());
        }
    }
}
