use tariff::Tariff;
use tariff_demos::common::print_timeline;
use tariff_mock::fixtures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tariff = Tariff::builder()
        .config_json(r#"{ "output_order": "chronological" }"#)?
        .build();
    println!("config: {:?}", tariff.config());

    let s = fixtures::by_name("new_spans_two_olds")?;
    print_timeline("reconciled", &tariff.reconcile(s.old, s.new));

    // Unknown options are reported, not ignored.
    if let Err(e) = Tariff::builder().config_json(r#"{ "output_order": "random" }"#) {
        println!("rejected config: {e}");
    }
    Ok(())
}
