use std::collections::BTreeMap;

use crate::config::{SchemePreset, Universe};
use crate::models::scheme::SchemeOutput;
use crate::models::ticker::TickerRecord;
use crate::services::stats;

/// Expands a scheme preset into per-ticker holdings.
///
/// Each category's weight is split equally among that category's
/// *successfully fetched* tickers, not its full static list. Holdings only
/// ever reference symbols present in the dataset.
pub struct SchemeService;

impl SchemeService {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        preset: &SchemePreset,
        universe: &Universe,
        fetched: &BTreeMap<String, TickerRecord>,
    ) -> SchemeOutput {
        let mut holdings: BTreeMap<String, f64> = BTreeMap::new();

        for (category, weight) in preset.weights.iter() {
            if weight == 0 {
                continue;
            }
            let available: Vec<&String> = universe
                .symbols_in(category)
                .iter()
                .filter(|symbol| fetched.contains_key(*symbol))
                .collect();
            if available.is_empty() {
                continue;
            }

            let share = stats::round2(f64::from(weight) / available.len() as f64);
            for symbol in available {
                if holdings.contains_key(symbol) {
                    // Unreachable with a validated config; keep the first claim.
                    tracing::warn!(
                        symbol = symbol.as_str(),
                        scheme = preset.name.as_str(),
                        %category,
                        "symbol claimed by two categories, keeping first share"
                    );
                    continue;
                }
                holdings.insert(symbol.clone(), share);
            }
        }

        SchemeOutput {
            id: preset.id,
            name: preset.name.clone(),
            weights: preset.weights,
            holdings,
        }
    }
}

impl Default for SchemeService {
    fn default() -> Self {
        Self::new()
    }
}
