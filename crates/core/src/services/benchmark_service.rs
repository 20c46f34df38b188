use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::ticker::PricePoint;
use crate::providers::traits::MarketDataProvider;

/// A chronological series of fractional daily returns, keyed by date.
///
/// The date attached to each return is the *later* of the two trading days
/// it spans, so two series align on the days both instruments traded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl ReturnSeries {
    /// Derive daily returns from closing bars (ascending by date).
    /// The first (undefined) return is dropped; bars following a zero close
    /// are skipped.
    pub fn from_closes(bars: &[PricePoint]) -> Self {
        let points = bars
            .windows(2)
            .filter_map(|w| {
                if w[0].close != 0.0 {
                    Some((w[1].date, (w[1].close - w[0].close) / w[0].close))
                } else {
                    None
                }
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Return values without dates, in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, r)| *r).collect()
    }

    /// Inner join with another series on date: only dates present in both
    /// survive. Returns the two aligned value vectors.
    pub fn align(&self, other: &ReturnSeries) -> (Vec<f64>, Vec<f64>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.points.len() && j < other.points.len() {
            match self.points[i].0.cmp(&other.points[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    left.push(self.points[i].1);
                    right.push(other.points[j].1);
                    i += 1;
                    j += 1;
                }
            }
        }
        (left, right)
    }
}

/// Loads the benchmark's return series, the first pipeline phase.
///
/// A benchmark failure is fatal for the whole run: the error propagates
/// instead of degrading every beta to a silent default.
pub struct BenchmarkService;

impl BenchmarkService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch one year of daily closes for the benchmark and derive its
    /// daily-return series.
    pub async fn load_returns(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ReturnSeries, CoreError> {
        let bars = provider.fetch_daily_history(symbol, from, to).await?;
        if bars.len() < 2 {
            return Err(CoreError::InsufficientData {
                symbol: symbol.to_string(),
                rows: bars.len(),
                min: 2,
            });
        }
        let series = ReturnSeries::from_closes(&bars);
        tracing::debug!(symbol, days = series.len(), "benchmark return series ready");
        Ok(series)
    }
}

impl Default for BenchmarkService {
    fn default() -> Self {
        Self::new()
    }
}
