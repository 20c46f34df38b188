use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::scheme::SchemeOutput;
use super::ticker::TickerRecord;

/// The complete generated snapshot — the sole persisted artifact.
///
/// Fully regenerated on every run; there is no merge with prior output.
/// `BTreeMap` keeps ticker ordering deterministic so two runs over identical
/// upstream data serialize byte-identically except for `fetched_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// UTC generation timestamp (ISO-8601)
    #[serde(rename = "fetchedAt")]
    pub fetched_at: DateTime<Utc>,

    /// symbol → computed record, successfully fetched tickers only
    pub tickers: BTreeMap<String, TickerRecord>,

    /// All schemes, in preset order
    pub schemes: Vec<SchemeOutput>,
}

/// Why a ticker was excluded from the snapshot.
///
/// Skips are fully isolated: they are logged, reported, and never abort the
/// run or leave a partial record in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer daily bars than the configured minimum
    InsufficientData { rows: usize },
    /// The fetch itself failed (network, API, parse)
    FetchFailed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::InsufficientData { rows } => {
                write!(f, "insufficient data ({rows} rows)")
            }
            SkipReason::FetchFailed(message) => write!(f, "fetch failed: {message}"),
        }
    }
}
