use tariff::{MergeAnchor, OutputOrder, PriceKey, PricedInterval, Tariff};
use tariff_demos::common::print_timeline;
use tariff_mock::fixtures::day;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = PriceKey::new("milk", 1, 7);
    // Old        |--------| 120
    // New  |--------|       120  (starts earlier, same price)
    let old = vec![PricedInterval::try_new(
        10,
        key.clone(),
        day(2024, 3, 10),
        day(2024, 3, 20),
        120,
    )?];
    let new = vec![PricedInterval::try_new(
        11,
        key,
        day(2024, 3, 1),
        day(2024, 3, 15),
        120,
    )?];

    for anchor in [MergeAnchor::Continuation, MergeAnchor::Earliest] {
        let tariff = Tariff::builder()
            .merge_anchor(anchor)
            .output_order(OutputOrder::Chronological)
            .build();
        let out = tariff.reconcile(old.clone(), new.clone());
        print_timeline(&format!("{anchor:?}"), &out);
    }
    Ok(())
}
