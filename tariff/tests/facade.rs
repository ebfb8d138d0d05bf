use std::sync::Arc;

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use tariff::{
    MergeAnchor, OutputOrder, PriceKey, PricedInterval, ReconcileConfig, ReconcileReport,
    ReconcileStats, Tariff, TariffError,
};
use tariff_mock::{CannedReconciler, fixtures};

#[test]
fn default_tariff_reproduces_every_fixture() {
    let tariff = Tariff::builder().build();
    assert_eq!(tariff.reconciler_name(), "timeline");
    assert_eq!(tariff.config(), &ReconcileConfig::default());
    for s in fixtures::all() {
        assert_eq!(tariff.reconcile(s.old, s.new), s.expected, "scenario {}", s.name);
    }
}

#[test]
fn config_json_sets_both_options() {
    let tariff = Tariff::builder()
        .config_json(r#"{"merge_anchor":"earliest","output_order":"chronological"}"#)
        .unwrap()
        .build();
    assert_eq!(tariff.config().merge_anchor, MergeAnchor::Earliest);
    assert_eq!(tariff.config().output_order, OutputOrder::Chronological);
}

#[test]
fn config_json_rejects_garbage() {
    let err = Tariff::builder().config_json("{ not json").err().unwrap();
    assert!(matches!(err, TariffError::Config(_)));

    let err = Tariff::builder()
        .config_json(r#"{"merge_anchor":"latest"}"#)
        .err()
        .unwrap();
    assert!(matches!(err, TariffError::Config(_)));
}

#[test]
fn config_file_loads_and_reports_missing_files() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("tariff-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"output_order":"chronological"}"#).unwrap();

    let tariff = Tariff::builder().config_file(&path).unwrap().build();
    assert_eq!(tariff.config().output_order, OutputOrder::Chronological);
    assert_eq!(tariff.config().merge_anchor, MergeAnchor::Continuation);
    std::fs::remove_file(&path).unwrap();

    let err = Tariff::builder().config_file(&path).err().unwrap();
    assert!(matches!(err, TariffError::Config(_)));
}

#[test]
fn builder_setters_override_loaded_config() {
    let tariff = Tariff::builder()
        .config(ReconcileConfig {
            merge_anchor: MergeAnchor::Earliest,
            output_order: OutputOrder::Chronological,
        })
        .merge_anchor(MergeAnchor::Continuation)
        .build();
    assert_eq!(tariff.config().merge_anchor, MergeAnchor::Continuation);
    assert_eq!(tariff.config().output_order, OutputOrder::Chronological);
}

#[test]
fn custom_reconciler_receives_the_inputs() {
    let s = fixtures::by_name("two_news_inside_old").unwrap();
    let canned = Arc::new(CannedReconciler::from_scenario(&s));
    let tariff = Tariff::builder().with_reconciler(canned.clone()).build();

    assert_eq!(tariff.reconciler_name(), "tariff-mock");
    let out = tariff.reconcile(s.old.clone(), s.new.clone());
    assert_eq!(out, s.expected);
    assert_eq!(canned.calls(), 1);
    assert_eq!(canned.recorded()[0].new, s.new);
}

#[test]
fn chronological_order_applies_to_custom_reconcilers() {
    let s = fixtures::by_name("two_news_inside_old").unwrap();
    let canned = Arc::new(CannedReconciler::new(ReconcileReport {
        intervals: s.expected.clone(),
        stats: ReconcileStats {
            residuals: 3,
            ..ReconcileStats::default()
        },
    }));
    let tariff = Tariff::builder()
        .with_reconciler(canned)
        .output_order(OutputOrder::Chronological)
        .build();

    let report = tariff.reconcile_report(s.old, s.new);
    assert_eq!(report.stats.residuals, 3);
    let begins: Vec<_> = report.intervals.iter().map(|p| p.begin).collect();
    let mut sorted = begins.clone();
    sorted.sort();
    assert_eq!(begins, sorted);
}

#[test]
fn earliest_anchor_keeps_leading_new_data() {
    let key = PriceKey::new("product1", 1, 1);
    let t = |d| fixtures::day(2013, 1, d);
    let old = vec![PricedInterval::new(1, key.clone(), t(10), t(20), 80)];
    let new = vec![PricedInterval::new(2, key.clone(), t(5), t(15), 80)];

    let snap = Tariff::builder().build().reconcile(old.clone(), new.clone());
    assert!(snap.iter().all(|p| p.begin >= t(10)));

    let keep = Tariff::builder()
        .merge_anchor(MergeAnchor::Earliest)
        .build()
        .reconcile(old, new);
    assert!(keep.iter().any(|p| p.begin == t(5) && p.id.get() == 1));
}

fn arb_interval() -> impl Strategy<Value = PricedInterval> {
    (0usize..2, 0i64..50, 1i64..10, 0i64..3).prop_map(|(c, b, len, v)| {
        let key = PriceKey::new(["a", "b"][c], 1, 1);
        let at = |s: i64| DateTime::<Utc>::from_timestamp(s * 3_600, 0).unwrap();
        PricedInterval::new(0, key, at(b), at(b + len), v)
    })
}

proptest! {
    #[test]
    fn chronological_is_a_sorted_emission(
        old in proptest::collection::vec(arb_interval(), 0..8),
        new in proptest::collection::vec(arb_interval(), 0..8),
    ) {
        let emission = Tariff::builder().build().reconcile(old.clone(), new.clone());
        let sorted_out = Tariff::builder()
            .output_order(OutputOrder::Chronological)
            .build()
            .reconcile(old, new);
        prop_assert_eq!(timeline_sorted(emission), sorted_out);
    }
}

fn timeline_sorted(mut v: Vec<PricedInterval>) -> Vec<PricedInterval> {
    v.sort_by(PricedInterval::timeline_cmp);
    v
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tariff>();
    assert_send_sync::<PricedInterval>();
    assert_send_sync::<ReconcileReport>();
    assert_send_sync::<CannedReconciler>();
}
