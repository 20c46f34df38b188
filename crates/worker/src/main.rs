use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_snapshot_core::config::JobConfig;
use market_snapshot_core::providers::yahoo_finance::YahooFinanceProvider;
use market_snapshot_core::SnapshotJob;

#[derive(Debug, Parser)]
#[command(name = "market-snapshot-worker")]
struct Args {
    /// Override the output path (default: frontend/src/data/marketData.json).
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    /// Do everything except writing the output file.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = JobConfig::default();
    if let Some(output) = args.output {
        config.output_path = output;
    }

    let provider = YahooFinanceProvider::new()?;
    let job = SnapshotJob::new(config, Box::new(provider))?;

    let report = if args.dry_run {
        let report = job.run().await?;
        tracing::info!(dry_run = true, "skipping output write");
        report
    } else {
        job.run_and_write().await?
    };

    tracing::info!(
        fetched = report.fetched_count(),
        skipped = report.skipped_count(),
        "snapshot complete"
    );

    Ok(())
}
