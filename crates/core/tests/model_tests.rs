// ═══════════════════════════════════════════════════════════════════
// Model & Config Tests — Category, TickerProfile, TickerRecord,
// CategoryWeights, Dataset, Universe, JobConfig
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use market_snapshot_core::config::{JobConfig, SchemePreset, Universe};
use market_snapshot_core::errors::CoreError;
use market_snapshot_core::models::dataset::{Dataset, SkipReason};
use market_snapshot_core::models::scheme::{CategoryWeights, SchemeOutput};
use market_snapshot_core::models::ticker::{Category, PricePoint, TickerProfile, TickerRecord};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn syms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ═══════════════════════════════════════════════════════════════════
//  Category
// ═══════════════════════════════════════════════════════════════════

mod category {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Category::Core.to_string(), "core");
        assert_eq!(Category::Growth.to_string(), "growth");
        assert_eq!(Category::Speculation.to_string(), "speculation");
        assert_eq!(Category::Cash.to_string(), "cash");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Core).unwrap(), "\"core\"");
        assert_eq!(
            serde_json::to_string(&Category::Speculation).unwrap(),
            "\"speculation\""
        );
    }

    #[test]
    fn serde_roundtrip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(category, back);
        }
    }

    #[test]
    fn all_is_in_declared_order() {
        assert_eq!(
            Category::ALL,
            [
                Category::Core,
                Category::Growth,
                Category::Speculation,
                Category::Cash
            ]
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TickerProfile
// ═══════════════════════════════════════════════════════════════════

mod ticker_profile {
    use super::*;

    #[test]
    fn display_name_prefers_short_name() {
        let profile = TickerProfile {
            short_name: Some("Apple Inc.".into()),
            long_name: Some("Apple Incorporated".into()),
            sector: None,
        };
        assert_eq!(profile.display_name("AAPL"), "Apple Inc.");
    }

    #[test]
    fn display_name_falls_back_to_long_name() {
        let profile = TickerProfile {
            short_name: None,
            long_name: Some("Apple Incorporated".into()),
            sector: None,
        };
        assert_eq!(profile.display_name("AAPL"), "Apple Incorporated");
    }

    #[test]
    fn display_name_falls_back_to_symbol() {
        assert_eq!(TickerProfile::default().display_name("AAPL"), "AAPL");
    }

    #[test]
    fn sector_defaults_to_na() {
        assert_eq!(TickerProfile::default().sector_or_default(), "N/A");
        let profile = TickerProfile {
            sector: Some("Technology".into()),
            ..Default::default()
        };
        assert_eq!(profile.sector_or_default(), "Technology");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Serialization contract
// ═══════════════════════════════════════════════════════════════════

mod serialization {
    use super::*;

    fn sample_record() -> TickerRecord {
        TickerRecord {
            name: "Apple Inc.".into(),
            sector: "Technology".into(),
            category: Category::Core,
            price: 231.59,
            return_1y: 12.4,
            vol: 22.1,
            beta: 1.19,
            history: vec![PricePoint {
                date: d(2025, 1, 2),
                close: 243.85,
            }],
        }
    }

    #[test]
    fn price_point_uses_date_and_close() {
        let point = PricePoint {
            date: d(2025, 1, 2),
            close: 243.85,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2025-01-02");
        assert_eq!(json["close"], 243.85);
    }

    #[test]
    fn ticker_record_renames_return_field() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["return1Y"], 12.4);
        assert!(json.get("return_1y").is_none());
        assert_eq!(json["category"], "core");
        assert_eq!(json["vol"], 22.1);
        assert_eq!(json["beta"], 1.19);
    }

    #[test]
    fn ticker_record_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: TickerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn weights_serialize_in_category_order() {
        let weights = CategoryWeights::new(40, 30, 20, 10);
        let json = serde_json::to_string(&weights).unwrap();
        assert_eq!(
            json,
            "{\"core\":40,\"growth\":30,\"speculation\":20,\"cash\":10}"
        );
    }

    #[test]
    fn dataset_renames_fetched_at() {
        let dataset = Dataset {
            fetched_at: "2025-06-01T12:00:00Z".parse().unwrap(),
            tickers: Default::default(),
            schemes: vec![SchemeOutput {
                id: 1,
                name: "Extreme Bull".into(),
                weights: CategoryWeights::new(40, 30, 20, 10),
                holdings: Default::default(),
            }],
        };
        let json = serde_json::to_value(&dataset).unwrap();
        assert!(json.get("fetchedAt").is_some());
        assert!(json.get("fetched_at").is_none());
        assert_eq!(json["schemes"][0]["name"], "Extreme Bull");
    }

    #[test]
    fn skip_reason_display() {
        let reason = SkipReason::InsufficientData { rows: 10 };
        assert_eq!(reason.to_string(), "insufficient data (10 rows)");
        let reason = SkipReason::FetchFailed("timeout".into());
        assert_eq!(reason.to_string(), "fetch failed: timeout");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CategoryWeights
// ═══════════════════════════════════════════════════════════════════

mod weights {
    use super::*;

    #[test]
    fn get_per_category() {
        let weights = CategoryWeights::new(40, 30, 20, 10);
        assert_eq!(weights.get(Category::Core), 40);
        assert_eq!(weights.get(Category::Growth), 30);
        assert_eq!(weights.get(Category::Speculation), 20);
        assert_eq!(weights.get(Category::Cash), 10);
    }

    #[test]
    fn iter_follows_declared_order() {
        let weights = CategoryWeights::new(40, 30, 20, 10);
        let pairs: Vec<_> = weights.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Category::Core, 40),
                (Category::Growth, 30),
                (Category::Speculation, 20),
                (Category::Cash, 10)
            ]
        );
    }

    #[test]
    fn total_sums_all_categories() {
        assert_eq!(CategoryWeights::new(40, 30, 20, 10).total(), 100);
        assert_eq!(CategoryWeights::new(40, 0, 0, 60).total(), 100);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Universe
// ═══════════════════════════════════════════════════════════════════

mod universe {
    use super::*;

    fn sample() -> Universe {
        Universe::new(vec![
            (Category::Core, syms(&["AAPL", "MSFT"])),
            (Category::Growth, syms(&["NVDA"])),
            (Category::Cash, syms(&["BIL"])),
        ])
    }

    #[test]
    fn category_of_known_symbol() {
        assert_eq!(sample().category_of("NVDA"), Category::Growth);
        assert_eq!(sample().category_of("BIL"), Category::Cash);
    }

    #[test]
    fn category_of_unknown_symbol_defaults_to_core() {
        assert_eq!(sample().category_of("ZZZZ"), Category::Core);
    }

    #[test]
    fn category_of_duplicate_symbol_takes_first_declared() {
        let universe = Universe::new(vec![
            (Category::Growth, syms(&["AAPL"])),
            (Category::Core, syms(&["AAPL"])),
        ]);
        assert_eq!(universe.category_of("AAPL"), Category::Growth);
    }

    #[test]
    fn all_symbols_in_declared_order() {
        let binding = sample();
        let symbols: Vec<_> = binding.all_symbols().collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "NVDA", "BIL"]);
    }

    #[test]
    fn symbols_in_absent_category_is_empty() {
        assert!(sample().symbols_in(Category::Speculation).is_empty());
    }

    #[test]
    fn symbol_count() {
        assert_eq!(sample().symbol_count(), 4);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  JobConfig
// ═══════════════════════════════════════════════════════════════════

mod job_config {
    use super::*;

    #[test]
    fn default_is_valid() {
        JobConfig::default().validate().unwrap();
    }

    #[test]
    fn default_universe_shape() {
        let config = JobConfig::default();
        assert_eq!(config.benchmark_symbol, "SPY");
        assert_eq!(config.universe.symbols_in(Category::Core).len(), 8);
        assert_eq!(config.universe.symbols_in(Category::Growth).len(), 6);
        assert_eq!(config.universe.symbols_in(Category::Speculation).len(), 5);
        assert_eq!(config.universe.symbols_in(Category::Cash).len(), 4);
        assert_eq!(config.universe.symbol_count(), 23);
    }

    #[test]
    fn default_schemes() {
        let config = JobConfig::default();
        assert_eq!(config.schemes.len(), 5);
        let ids: Vec<_> = config.schemes.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        // every preset's weights sum to 100 by convention
        for scheme in &config.schemes {
            assert_eq!(scheme.weights.total(), 100, "scheme {}", scheme.name);
        }
        assert_eq!(config.schemes[2].name, "Neutral");
        assert_eq!(config.schemes[2].weights.speculation, 0);
    }

    #[test]
    fn default_thresholds() {
        let config = JobConfig::default();
        assert_eq!(config.history_days, 365);
        assert_eq!(config.min_history_rows, 20);
        assert_eq!(config.history_stride, 5);
        assert!(config.output_path.ends_with("marketData.json"));
    }

    #[test]
    fn validate_rejects_symbol_in_two_categories() {
        let mut config = JobConfig::default();
        config.universe = Universe::new(vec![
            (Category::Core, syms(&["AAPL"])),
            (Category::Growth, syms(&["AAPL"])),
        ]);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
        assert!(err.to_string().contains("AAPL"));
    }

    #[test]
    fn validate_rejects_empty_category() {
        let mut config = JobConfig::default();
        config.universe = Universe::new(vec![
            (Category::Core, syms(&["AAPL"])),
            (Category::Cash, syms(&[])),
        ]);
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_stride() {
        let mut config = JobConfig::default();
        config.history_stride = 0;
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn preset_constructor() {
        let preset = SchemePreset::new(7, "Custom", CategoryWeights::new(25, 25, 25, 25));
        assert_eq!(preset.id, 7);
        assert_eq!(preset.name, "Custom");
        assert_eq!(preset.weights.total(), 100);
    }
}
