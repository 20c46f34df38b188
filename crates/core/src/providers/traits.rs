use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::ticker::{PricePoint, TickerProfile};

/// Trait abstraction over the upstream market-data source.
///
/// The pipeline only needs two query types: a daily price history and
/// descriptive metadata. Any provider offering both satisfies the contract,
/// and tests substitute mock implementations at this seam.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Daily closing bars for `symbol` in `[from, to]`, ascending by date,
    /// at most one bar per date.
    async fn fetch_daily_history(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PricePoint>, CoreError>;

    /// Descriptive metadata for `symbol`. Missing fields are `None`; callers
    /// degrade to fallbacks rather than failing the ticker.
    async fn fetch_profile(&self, symbol: &str) -> Result<TickerProfile, CoreError>;
}
