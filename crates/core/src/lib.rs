pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::collections::BTreeMap;

use chrono::Utc;

use config::JobConfig;
use errors::CoreError;
use models::dataset::{Dataset, SkipReason};
use models::ticker::TickerRecord;
use providers::traits::MarketDataProvider;
use services::benchmark_service::BenchmarkService;
use services::metrics_service::MetricsService;
use services::scheme_service::SchemeService;
use storage::writer::DatasetWriter;

/// Outcome of a snapshot run: the generated dataset plus the tickers that
/// were skipped (and why). Skips never abort the run.
#[derive(Debug)]
pub struct SnapshotReport {
    pub dataset: Dataset,
    pub skipped: Vec<(String, SkipReason)>,
}

impl SnapshotReport {
    #[must_use]
    pub fn fetched_count(&self) -> usize {
        self.dataset.tickers.len()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Main entry point for the market-snapshot core library.
///
/// Runs the whole job as a single sequential pass:
/// 1. fetch the benchmark and derive its daily-return series (fatal on error);
/// 2. fetch and compute metrics for every universe ticker, isolating
///    per-ticker failures as skips;
/// 3. after all fetches settle, expand every scheme into holdings over the
///    fetched set;
/// 4. assemble the timestamped dataset.
#[must_use]
pub struct SnapshotJob {
    config: JobConfig,
    provider: Box<dyn MarketDataProvider>,
    benchmark_service: BenchmarkService,
    metrics_service: MetricsService,
    scheme_service: SchemeService,
}

impl SnapshotJob {
    /// Build a job from an immutable configuration and a market-data
    /// provider. The configuration is validated here, before any fetch.
    pub fn new(
        config: JobConfig,
        provider: Box<dyn MarketDataProvider>,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let metrics_service = MetricsService::new(config.min_history_rows, config.history_stride);
        Ok(Self {
            config,
            provider,
            benchmark_service: BenchmarkService::new(),
            metrics_service,
            scheme_service: SchemeService::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Execute the full pipeline and return the generated dataset without
    /// writing it anywhere.
    pub async fn run(&self) -> Result<SnapshotReport, CoreError> {
        let to = Utc::now().date_naive();
        let from = to - chrono::Duration::days(self.config.history_days);

        tracing::info!(
            benchmark = self.config.benchmark_symbol.as_str(),
            provider = self.provider.name(),
            "fetching benchmark history"
        );
        let benchmark = self
            .benchmark_service
            .load_returns(
                self.provider.as_ref(),
                &self.config.benchmark_symbol,
                from,
                to,
            )
            .await?;

        let total = self.config.universe.symbol_count();
        tracing::info!(total, "fetching ticker data");

        let mut tickers: BTreeMap<String, TickerRecord> = BTreeMap::new();
        let mut skipped: Vec<(String, SkipReason)> = Vec::new();

        for symbol in self.config.universe.all_symbols() {
            let category = self.config.universe.category_of(symbol);
            match self
                .metrics_service
                .compute(
                    self.provider.as_ref(),
                    symbol,
                    category,
                    &benchmark,
                    from,
                    to,
                )
                .await
            {
                Ok(record) => {
                    tracing::debug!(symbol, %category, "ticker fetched");
                    tickers.insert(symbol.to_string(), record);
                }
                Err(CoreError::InsufficientData { rows, .. }) => {
                    tracing::warn!(symbol, rows, "insufficient data, skipping");
                    skipped.push((symbol.to_string(), SkipReason::InsufficientData { rows }));
                }
                Err(err) => {
                    tracing::error!(symbol, error = %err, "fetch failed, skipping");
                    skipped.push((symbol.to_string(), SkipReason::FetchFailed(err.to_string())));
                }
            }
        }

        tracing::info!(fetched = tickers.len(), total, "ticker fetch complete");

        let schemes = self
            .config
            .schemes
            .iter()
            .map(|preset| {
                self.scheme_service
                    .build(preset, &self.config.universe, &tickers)
            })
            .collect();

        let dataset = Dataset {
            fetched_at: Utc::now(),
            tickers,
            schemes,
        };

        Ok(SnapshotReport { dataset, skipped })
    }

    /// Execute the pipeline and write the dataset to the configured path.
    pub async fn run_and_write(&self) -> Result<SnapshotReport, CoreError> {
        let report = self.run().await?;
        DatasetWriter::write(&report.dataset, &self.config.output_path)?;
        tracing::info!(
            path = %self.config.output_path.display(),
            tickers = report.fetched_count(),
            "wrote market data"
        );
        Ok(report)
    }
}
