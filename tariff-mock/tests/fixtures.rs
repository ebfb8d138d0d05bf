use std::collections::HashSet;

use tariff_core::{PriceReconciler, TariffError};
use tariff_mock::{CannedReconciler, fixtures};

#[test]
fn scenario_names_are_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for name in fixtures::names() {
        assert!(seen.insert(*name), "duplicate scenario {name}");
        let s = fixtures::by_name(name).expect("known scenario");
        assert_eq!(s.name, *name);
    }
    assert_eq!(fixtures::all().len(), fixtures::names().len());
}

#[test]
fn unknown_scenario_is_not_found() {
    let err = fixtures::by_name("no_such_case").unwrap_err();
    assert!(matches!(err, TariffError::NotFound { .. }));
}

#[test]
fn fixture_inputs_are_well_formed() {
    for s in fixtures::all() {
        for p in s.old.iter().chain(&s.new).chain(&s.expected) {
            assert!(p.begin < p.end, "{}: empty interval {p:?}", s.name);
        }
    }
}

#[test]
fn canned_reconciler_records_calls() {
    let s = fixtures::by_name("new_inside_old").unwrap();
    let canned = CannedReconciler::from_scenario(&s);

    let report = canned.reconcile(s.old.clone(), s.new.clone());
    assert_eq!(report.intervals, s.expected);
    assert_eq!(canned.calls(), 1);

    let rec = canned.recorded();
    assert_eq!(rec.len(), 1);
    assert_eq!(rec[0].old, s.old);
    assert_eq!(rec[0].new, s.new);
    assert_eq!(canned.name(), "tariff-mock");
}
