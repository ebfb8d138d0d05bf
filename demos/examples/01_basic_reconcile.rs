use tariff::Tariff;
use tariff_demos::common::print_timeline;
use tariff_mock::fixtures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Old |-----------------|  80
    // New   |-----| |-----|    90, 75
    let s = fixtures::by_name("two_news_inside_old")?;
    print_timeline("old", &s.old);
    print_timeline("new", &s.new);

    let report = Tariff::builder().build().reconcile_report(s.old, s.new);
    print_timeline("reconciled", &report.intervals);
    println!(
        "disjoint old={} disjoint new={} residuals={} merged={}",
        report.stats.disjoint_old,
        report.stats.disjoint_new,
        report.stats.residuals,
        report.stats.merged
    );

    if report.intervals != s.expected {
        return Err("reconciled timeline differs from the fixture".into());
    }
    Ok(())
}
