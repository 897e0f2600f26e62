//! Data Processor Module
//! Handles rating normalization and row extraction.

use super::record::{ProductImage, ProductRecord};
use polars::prelude::*;
use thiserror::Error;

/// Column holding the free-text rating.
pub const RATING_COL: &str = "ratings";
pub const NAME_COL: &str = "name";
pub const PRICE_COL: &str = "actual_price";
pub const IMAGE_COL: &str = "image";
pub const LINK_COL: &str = "link";

/// Columns every source file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [NAME_COL, RATING_COL, PRICE_COL, IMAGE_COL, LINK_COL];

/// First numeric token (integer or decimal) in a rating string.
const RATING_PATTERN: &str = r"(\d+\.?\d*)";

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Replace the rating column with its numeric value and drop rows
    /// where none could be extracted.
    ///
    /// Non-text columns are cast to text first, so an already-clean
    /// `Float64` column passes through unchanged.
    pub fn clean_ratings(df: DataFrame) -> Result<DataFrame, CleanError> {
        let cleaned = df
            .lazy()
            .with_column(
                col(RATING_COL)
                    .cast(DataType::String)
                    .str()
                    .extract(lit(RATING_PATTERN), 1)
                    .cast(DataType::Float64)
                    .alias(RATING_COL),
            )
            .filter(col(RATING_COL).is_not_null())
            .collect()?;

        Ok(cleaned)
    }

    /// Convert a cleaned DataFrame into records, preserving row order.
    pub fn to_records(df: &DataFrame) -> Result<Vec<ProductRecord>, CleanError> {
        let names = Self::text_column(df, NAME_COL)?;
        let prices = Self::text_column(df, PRICE_COL)?;
        let images = Self::text_column(df, IMAGE_COL)?;
        let links = Self::text_column(df, LINK_COL)?;
        let ratings = df
            .column(RATING_COL)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;

        let names = names.str()?;
        let prices = prices.str()?;
        let images = images.str()?;
        let links = links.str()?;
        let ratings = ratings.f64()?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            // Every record carries a rating
            let Some(rating) = ratings.get(i).filter(|v| !v.is_nan()) else {
                continue;
            };

            records.push(ProductRecord {
                name: names.get(i).map(str::to_string),
                rating,
                actual_price: prices.get(i).map(str::to_string),
                image: images.get(i).and_then(ProductImage::parse),
                link: links.get(i).map(str::to_string),
            });
        }

        Ok(records)
    }

    fn text_column(df: &DataFrame, name: &str) -> Result<Series, CleanError> {
        let series = df
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::String)?;
        Ok(series)
    }
}
