use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ticker::Category;

/// Integer weight (percent) per category.
///
/// A fixed-field struct rather than a map: the category set is closed, and
/// serializing named fields keeps the JSON key order stable across runs
/// (core, growth, speculation, cash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub core: u32,
    pub growth: u32,
    pub speculation: u32,
    pub cash: u32,
}

impl CategoryWeights {
    pub const fn new(core: u32, growth: u32, speculation: u32, cash: u32) -> Self {
        Self {
            core,
            growth,
            speculation,
            cash,
        }
    }

    /// Weight for a single category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Core => self.core,
            Category::Growth => self.growth,
            Category::Speculation => self.speculation,
            Category::Cash => self.cash,
        }
    }

    /// Iterate (category, weight) pairs in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Sum of all category weights (100 by convention, not enforced).
    pub fn total(&self) -> u32 {
        self.core + self.growth + self.speculation + self.cash
    }
}

/// One scheme expanded into per-ticker holdings.
///
/// `holdings` maps symbol → percent of the portfolio; only symbols that were
/// successfully fetched appear. A category whose weight is zero, or whose
/// tickers were all skipped, contributes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeOutput {
    pub id: u32,
    pub name: String,
    pub weights: CategoryWeights,
    pub holdings: BTreeMap<String, f64>,
}
