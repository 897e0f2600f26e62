//! Product Record Module
//! Row-level types produced by the loader.

use serde::Serialize;
use std::path::PathBuf;

/// Product image cell. Some exports store a single URL, others a list of
/// URLs of which only the first is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductImage {
    Single(String),
    List(Vec<String>),
}

impl ProductImage {
    /// Parse a raw cell. Bracketed lists like `['u1', "u2"]` become `List`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
            return Some(ProductImage::Single(raw.to_string()));
        };

        let quoted = Self::quoted_items(inner);
        let urls = if quoted.is_empty() {
            inner
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            quoted
        };

        Some(ProductImage::List(urls))
    }

    /// Items enclosed in matching `'` or `"` quotes, in order. Commas
    /// inside quotes belong to the item.
    fn quoted_items(inner: &str) -> Vec<String> {
        let mut items = Vec::new();
        let mut chars = inner.chars();

        while let Some(ch) = chars.next() {
            if ch != '\'' && ch != '"' {
                continue;
            }
            let item: String = chars.by_ref().take_while(|&c| c != ch).collect();
            let item = item.trim();
            if !item.is_empty() {
                items.push(item.to_string());
            }
        }

        items
    }

    /// The URL to display for this image.
    pub fn representative(&self) -> Option<&str> {
        match self {
            ProductImage::Single(url) => Some(url.as_str()),
            ProductImage::List(urls) => urls.first().map(String::as_str),
        }
    }
}

/// One cleaned row of a source dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub name: Option<String>,
    pub rating: f64,
    pub actual_price: Option<String>,
    pub image: Option<ProductImage>,
    pub link: Option<String>,
}

impl ProductRecord {
    /// Build a record with only a name and rating set.
    pub fn named(name: &str, rating: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            rating,
            actual_price: None,
            image: None,
            link: None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(ProductImage::representative)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

/// All cleaned records of one source, in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub label: String,
    pub path: PathBuf,
    pub records: Vec<ProductRecord>,
    /// Rows discarded because no usable rating could be extracted.
    pub dropped: usize,
}

impl Dataset {
    pub fn from_records(label: &str, records: Vec<ProductRecord>) -> Self {
        Self {
            label: label.to_string(),
            path: PathBuf::new(),
            records,
            dropped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_url_is_single_image() {
        let image = ProductImage::parse(" https://img/a.jpg ").unwrap();
        assert_eq!(image, ProductImage::Single("https://img/a.jpg".into()));
        assert_eq!(image.representative(), Some("https://img/a.jpg"));
    }

    #[test]
    fn bracketed_list_uses_first_url() {
        let image = ProductImage::parse("['https://img/a.jpg', \"https://img/b.jpg\"]").unwrap();
        assert_eq!(
            image,
            ProductImage::List(vec!["https://img/a.jpg".into(), "https://img/b.jpg".into()])
        );
        assert_eq!(image.representative(), Some("https://img/a.jpg"));
    }

    #[test]
    fn commas_inside_quoted_urls_are_kept() {
        let image = ProductImage::parse(
            "['https://img/resize,w_200/a.jpg', 'https://img/b.jpg']",
        )
        .unwrap();
        assert_eq!(image.representative(), Some("https://img/resize,w_200/a.jpg"));
        assert_eq!(
            image,
            ProductImage::List(vec![
                "https://img/resize,w_200/a.jpg".into(),
                "https://img/b.jpg".into()
            ])
        );
    }

    #[test]
    fn unquoted_list_splits_on_commas() {
        let image = ProductImage::parse("[https://img/a.jpg, https://img/b.jpg]").unwrap();
        assert_eq!(image.representative(), Some("https://img/a.jpg"));
    }

    #[test]
    fn empty_cells_have_no_image() {
        assert!(ProductImage::parse("   ").is_none());
        assert_eq!(ProductImage::parse("[]").unwrap().representative(), None);
    }

    #[test]
    fn unnamed_record_display() {
        let mut record = ProductRecord::named("Mouse", 4.0);
        record.name = None;
        assert_eq!(record.display_name(), "(unnamed)");
        assert_eq!(record.image_url(), None);
    }
}
