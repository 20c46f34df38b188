pub mod dataset;
pub mod scheme;
pub mod ticker;
