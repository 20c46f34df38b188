use std::collections::HashMap;
use std::path::PathBuf;

use crate::errors::CoreError;
use crate::models::scheme::CategoryWeights;
use crate::models::ticker::Category;

/// The fixed mapping from category to ticker symbols.
///
/// Stored as an ordered list of (category, symbols) pairs so that
/// `category_of` scans categories in declared order and the first match
/// wins — deterministic even if a symbol were ever listed twice.
#[derive(Debug, Clone)]
pub struct Universe {
    categories: Vec<(Category, Vec<String>)>,
}

impl Universe {
    pub fn new(categories: Vec<(Category, Vec<String>)>) -> Self {
        Self { categories }
    }

    /// Iterate (category, symbols) in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.categories
            .iter()
            .map(|(category, symbols)| (*category, symbols.as_slice()))
    }

    /// Every symbol, in declared category order then list order.
    pub fn all_symbols(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|(_, symbols)| symbols.iter().map(String::as_str))
    }

    pub fn symbol_count(&self) -> usize {
        self.categories.iter().map(|(_, symbols)| symbols.len()).sum()
    }

    /// Static ticker list for one category (empty if the category is absent).
    pub fn symbols_in(&self, category: Category) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, symbols)| symbols.as_slice())
            .unwrap_or(&[])
    }

    /// Category of a symbol: first declared category containing it, or
    /// `Core` when the symbol is not listed anywhere.
    pub fn category_of(&self, symbol: &str) -> Category {
        self.categories
            .iter()
            .find(|(_, symbols)| symbols.iter().any(|s| s == symbol))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Core)
    }
}

/// A named allocation preset across the four categories.
#[derive(Debug, Clone)]
pub struct SchemePreset {
    pub id: u32,
    pub name: String,
    pub weights: CategoryWeights,
}

impl SchemePreset {
    pub fn new(id: u32, name: impl Into<String>, weights: CategoryWeights) -> Self {
        Self {
            id,
            name: name.into(),
            weights,
        }
    }
}

/// Immutable configuration for one snapshot run, constructed once at startup.
/// `Default` carries the compiled-in universe, schemes, and output path;
/// there are no environment variables or config files.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Reference index for beta computation
    pub benchmark_symbol: String,

    /// Category → ticker lists
    pub universe: Universe,

    /// Allocation presets, in output order
    pub schemes: Vec<SchemePreset>,

    /// Destination for the generated dataset
    pub output_path: PathBuf,

    /// History window (calendar days)
    pub history_days: i64,

    /// Minimum daily bars for a ticker to be included
    pub min_history_rows: usize,

    /// Down-sampling stride for the serialized price history
    pub history_stride: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            benchmark_symbol: "SPY".to_string(),
            universe: Universe::new(vec![
                (
                    Category::Core,
                    symbols(&["AAPL", "MSFT", "JNJ", "PG", "JPM", "UNH", "KO", "V"]),
                ),
                (
                    Category::Growth,
                    symbols(&["NVDA", "AMZN", "META", "GOOGL", "CRM", "ADBE"]),
                ),
                (
                    Category::Speculation,
                    symbols(&["PLTR", "COIN", "MARA", "SMCI", "SOFI"]),
                ),
                (Category::Cash, symbols(&["BIL", "SHV", "SGOV", "USFR"])),
            ]),
            schemes: vec![
                SchemePreset::new(1, "Extreme Bull", CategoryWeights::new(40, 30, 20, 10)),
                SchemePreset::new(2, "Moderate Bull", CategoryWeights::new(40, 30, 10, 20)),
                SchemePreset::new(3, "Neutral", CategoryWeights::new(40, 30, 0, 30)),
                SchemePreset::new(4, "Mild Bear", CategoryWeights::new(40, 15, 0, 45)),
                SchemePreset::new(5, "Extreme Bear", CategoryWeights::new(40, 0, 0, 60)),
            ],
            output_path: PathBuf::from("frontend/src/data/marketData.json"),
            history_days: 365,
            min_history_rows: 20,
            history_stride: 5,
        }
    }
}

impl JobConfig {
    /// Validate the static configuration before the run starts.
    ///
    /// A symbol claimed by two categories would make category resolution and
    /// scheme holdings ambiguous, so it is rejected here rather than resolved
    /// silently downstream.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen: HashMap<&str, Category> = HashMap::new();
        for (category, symbols) in self.universe.iter() {
            if symbols.is_empty() {
                return Err(CoreError::InvalidConfig(format!(
                    "category '{category}' has no tickers"
                )));
            }
            for symbol in symbols {
                if let Some(previous) = seen.insert(symbol, category) {
                    return Err(CoreError::InvalidConfig(format!(
                        "symbol {symbol} is listed in both '{previous}' and '{category}'"
                    )));
                }
            }
        }
        if self.history_stride == 0 {
            return Err(CoreError::InvalidConfig(
                "history_stride must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
