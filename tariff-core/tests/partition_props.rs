use chrono::{DateTime, Utc};
use proptest::prelude::*;
use tariff_core::timeline::{key_range, key_runs};
use tariff_core::{PriceKey, PricedInterval, sort_timeline};

fn arb_interval() -> impl Strategy<Value = PricedInterval> {
    (
        0u64..1_000,
        0usize..3,
        0i32..3,
        0i32..3,
        0i64..1_000,
        1i64..100,
        0i64..10,
    )
        .prop_map(|(id, c, n, d, b, len, v)| {
            let key = PriceKey::new(["a", "b", "c"][c], n, d);
            let begin = DateTime::<Utc>::from_timestamp(b, 0).unwrap();
            let end = DateTime::<Utc>::from_timestamp(b + len, 0).unwrap();
            PricedInterval::new(id, key, begin, end, v)
        })
}

proptest! {
    #[test]
    fn sort_orders_by_key_then_begin(v in proptest::collection::vec(arb_interval(), 0..100)) {
        let sorted = sort_timeline(v.clone());
        prop_assert_eq!(sorted.len(), v.len());
        for w in sorted.windows(2) {
            prop_assert!((&w[0].key, w[0].begin) <= (&w[1].key, w[1].begin));
        }
        for p in &v {
            prop_assert!(sorted.contains(p));
        }
    }

    #[test]
    fn sort_is_stable_for_equal_keys(v in proptest::collection::vec(arb_interval(), 0..100)) {
        let sorted = sort_timeline(v.clone());
        for w in sorted.windows(2) {
            if w[0].key == w[1].key && w[0].begin == w[1].begin {
                let i = v.iter().position(|p| p == &w[0]).unwrap();
                let j = v.iter().rposition(|p| p == &w[1]).unwrap();
                prop_assert!(i <= j);
            }
        }
    }

    #[test]
    fn key_range_selects_exactly_one_key(v in proptest::collection::vec(arb_interval(), 0..100), probe in arb_interval()) {
        let sorted = sort_timeline(v);
        let r = key_range(&sorted, &probe.key);
        let expected = sorted.iter().filter(|p| p.key == probe.key).count();
        prop_assert_eq!(r.len(), expected);
        for p in &sorted[r] {
            prop_assert_eq!(&p.key, &probe.key);
        }
    }

    #[test]
    fn key_runs_cover_the_sequence(v in proptest::collection::vec(arb_interval(), 0..100)) {
        let sorted = sort_timeline(v);
        let mut total = 0;
        let mut prev: Option<PriceKey> = None;
        for run in key_runs(&sorted) {
            let k = run[0].key.clone();
            prop_assert!(run.iter().all(|p| p.key == k));
            if let Some(pk) = &prev { prop_assert!(pk < &k); }
            total += run.len();
            prev = Some(k);
        }
        prop_assert_eq!(total, sorted.len());
    }
}
