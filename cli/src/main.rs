//! Baseline CLI
//!
//! Downloads the web-features dataset, groups features by Baseline status,
//! writes one JSON partition per status and renders the widely/newly
//! available pages plus an index. Takes no options.

mod fetch;
mod pipeline;
mod telemetry;

use baseline_core::SiteConfig;
use clap::Parser;

/// Generate Baseline feature pages from web-features
#[derive(Parser)]
#[command(name = "baseline")]
#[command(
    author,
    version,
    about = "Generate Baseline feature pages from the web-features dataset"
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();
    telemetry::init_tracing();

    let config = SiteConfig::default();
    match pipeline::run(&config).await {
        Ok(report) => tracing::info!(
            records = report.total_records(),
            partitions = report.partitions.len(),
            pages = report.pages.pages.len(),
            stylesheet = %report.stylesheet.display(),
            "Generation complete"
        ),
        // The run ends here without a distinct exit status.
        Err(err) => tracing::error!("Error: {err:#}"),
    }
}
