pub mod benchmark_service;
pub mod metrics_service;
pub mod scheme_service;
pub mod stats;
