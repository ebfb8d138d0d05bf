use tariff::Tariff;
use tariff_demos::common::init_tracing;
use tariff_mock::fixtures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug
    init_tracing();

    let tariff = Tariff::builder().build();
    for s in fixtures::all() {
        tracing::info!(scenario = s.name, "reconciling");
        let _ = tariff.reconcile_report(s.old, s.new);
    }
    Ok(())
}
