use tariff::PricedInterval;
use tracing_subscriber::fmt::format::FmtSpan;

/// Install a human-friendly tracing subscriber with env-based filtering.
///
/// Suggested: `RUST_LOG=tariff=debug,tariff_core=debug`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();
}

/// Print a timeline, one interval per line.
pub fn print_timeline(title: &str, intervals: &[PricedInterval]) {
    println!("{title}:");
    if intervals.is_empty() {
        println!("  (empty)");
    }
    for p in intervals {
        println!(
            "  {:<6} {:<16} [{} .. {}) {:>6}",
            p.id.to_string(),
            p.key.to_string(),
            p.begin.format("%Y-%m-%d"),
            p.end.format("%Y-%m-%d"),
            p.value
        );
    }
}
