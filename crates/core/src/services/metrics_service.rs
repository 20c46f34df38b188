use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::ticker::{Category, PricePoint, TickerProfile, TickerRecord};
use crate::providers::traits::MarketDataProvider;
use crate::services::benchmark_service::ReturnSeries;
use crate::services::stats;

/// Aligned samples must exceed this count for a covariance-based beta;
/// otherwise beta defaults to 1.0.
const MIN_BETA_SAMPLE: usize = 20;

/// Trading days per year, for annualizing daily volatility.
const TRADING_DAYS: f64 = 252.0;

/// Computes the per-ticker record: 1Y return, annualized volatility, beta
/// vs. the benchmark, and the down-sampled price history.
///
/// Errors returned here mean "no record" — the caller skips the ticker
/// entirely rather than inserting a partial entry.
pub struct MetricsService {
    min_history_rows: usize,
    history_stride: usize,
}

impl MetricsService {
    pub fn new(min_history_rows: usize, history_stride: usize) -> Self {
        Self {
            min_history_rows,
            history_stride,
        }
    }

    pub async fn compute(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
        category: Category,
        benchmark: &ReturnSeries,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<TickerRecord, CoreError> {
        let bars = provider.fetch_daily_history(symbol, from, to).await?;
        let min = self.min_history_rows.max(1);
        if bars.len() < min {
            return Err(CoreError::InsufficientData {
                symbol: symbol.to_string(),
                rows: bars.len(),
                min,
            });
        }

        // Metadata is best-effort: a failed lookup degrades to fallbacks
        // instead of costing us the ticker.
        let profile = match provider.fetch_profile(symbol).await {
            Ok(profile) => profile,
            Err(err) => {
                tracing::debug!(symbol, error = %err, "profile lookup failed, using fallbacks");
                TickerProfile::default()
            }
        };

        let first_close = bars[0].close;
        let last_close = bars[bars.len() - 1].close;
        let return_1y = stats::round1((last_close / first_close - 1.0) * 100.0);

        let returns = ReturnSeries::from_closes(&bars);
        let vol = stats::round1(stats::sample_std(&returns.values()) * TRADING_DAYS.sqrt() * 100.0);

        let beta = stats::round2(Self::beta(&returns, benchmark));

        Ok(TickerRecord {
            name: profile.display_name(symbol),
            sector: profile.sector_or_default(),
            category,
            price: stats::round2(last_close),
            return_1y,
            vol,
            beta,
            history: self.downsample(&bars),
        })
    }

    /// Beta = cov(ticker, benchmark) / var(benchmark) over the dates both
    /// series cover, defaulting to 1.0 for thin overlap or a flat benchmark.
    fn beta(returns: &ReturnSeries, benchmark: &ReturnSeries) -> f64 {
        let (ticker, bench) = returns.align(benchmark);
        if ticker.len() <= MIN_BETA_SAMPLE {
            return 1.0;
        }
        let variance = stats::sample_variance(&bench);
        if variance > 0.0 {
            stats::sample_covariance(&ticker, &bench) / variance
        } else {
            1.0
        }
    }

    /// Every `stride`-th bar by index, plus the most recent bar when its
    /// date is not already the last sample. Closes rounded to 2 decimals.
    fn downsample(&self, bars: &[PricePoint]) -> Vec<PricePoint> {
        let mut history: Vec<PricePoint> = bars
            .iter()
            .step_by(self.history_stride)
            .map(|bar| PricePoint {
                date: bar.date,
                close: stats::round2(bar.close),
            })
            .collect();

        if let Some(last) = bars.last() {
            if history.last().map(|p| p.date) != Some(last.date) {
                history.push(PricePoint {
                    date: last.date,
                    close: stats::round2(last.close),
                });
            }
        }

        history
    }
}
