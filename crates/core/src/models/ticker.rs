use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Allocation bucket a ticker belongs to.
/// Scheme weights are declared per category, not per ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Large, stable holdings (AAPL, JNJ, ...)
    Core,
    /// Higher-growth names (NVDA, META, ...)
    Growth,
    /// Volatile small positions (PLTR, COIN, ...)
    Speculation,
    /// Cash-equivalent ETFs (BIL, SGOV, ...)
    Cash,
}

impl Category {
    /// All categories in declared order. Lookups that scan categories
    /// (`Universe::category_of`, weight iteration) use this order, so a
    /// symbol mistakenly listed twice resolves deterministically.
    pub const ALL: [Category; 4] = [
        Category::Core,
        Category::Growth,
        Category::Speculation,
        Category::Cash,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Core => write!(f, "core"),
            Category::Growth => write!(f, "growth"),
            Category::Speculation => write!(f, "speculation"),
            Category::Cash => write!(f, "cash"),
        }
    }
}

/// A single daily closing bar (date → close).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Descriptive metadata for a ticker, as returned by the provider.
/// Every field is optional — the record falls back gracefully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerProfile {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub sector: Option<String>,
}

impl TickerProfile {
    /// Display name fallback chain: short name → long name → raw symbol.
    pub fn display_name(&self, symbol: &str) -> String {
        self.short_name
            .clone()
            .or_else(|| self.long_name.clone())
            .unwrap_or_else(|| symbol.to_string())
    }

    /// Sector, or the literal "N/A" when the provider has none.
    pub fn sector_or_default(&self) -> String {
        self.sector.clone().unwrap_or_else(|| "N/A".to_string())
    }
}

/// Computed metrics for one successfully fetched ticker.
///
/// Field names and rounding precisions are part of the compatibility
/// contract with the front-end that reads `marketData.json`:
/// 1 decimal for `return1Y`/`vol`, 2 decimals for `price`/`beta`/closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRecord {
    /// Display name (short name → long name → symbol)
    pub name: String,

    /// Sector, or "N/A" if the provider has none
    pub sector: String,

    /// Allocation bucket, resolved from the static universe
    pub category: Category,

    /// Latest closing price
    pub price: f64,

    /// 1-year percent return: (last_close / first_close - 1) * 100
    #[serde(rename = "return1Y")]
    pub return_1y: f64,

    /// Annualized volatility percent: stddev(daily returns) * sqrt(252) * 100
    pub vol: f64,

    /// Beta vs. the benchmark; 1.0 when the aligned sample is too small
    pub beta: f64,

    /// Down-sampled price history: every 5th trading day plus the most recent
    pub history: Vec<PricePoint>,
}
