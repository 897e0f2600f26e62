//! Data module - CSV loading and rating cleanup

mod loader;
mod processor;
mod record;

pub use loader::{Catalog, DataLoader, LoadError};
pub use processor::{CleanError, DataProcessor, REQUIRED_COLUMNS};
pub use record::{Dataset, ProductImage, ProductRecord};
