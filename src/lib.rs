//! Product Compare - side-by-side product search across two e-commerce exports
//!
//! Loads two product CSVs, normalizes their free-text ratings, and compares the
//! best-rated name matches of each source.

pub mod config;
pub mod data;
pub mod gui;
pub mod logging;
pub mod report;
pub mod search;

pub use config::{AppConfig, SourceConfig};
pub use data::{Catalog, DataLoader, Dataset, LoadError, ProductImage, ProductRecord};
pub use search::{search, ComparisonOutcome, Query, SearchOutcome, MAX_RESULTS};
