//! Search Engine Module
//! Case-insensitive name filtering over two datasets, then a best-rating comparison.

use super::outcome::{Candidate, ComparisonOutcome, SearchOutcome, SearchResult};
use crate::data::{Dataset, ProductRecord};
use tracing::debug;

/// Maximum number of matches kept per source.
pub const MAX_RESULTS: usize = 20;

/// A non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    folded: String,
}

impl Query {
    /// Returns `None` for an empty string: no search is performed then.
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            folded: text.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Literal, case-insensitive containment. Unnamed records never match.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        record
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&self.folded))
    }

    fn filter<'a>(&self, dataset: &'a Dataset) -> SearchResult<'a> {
        dataset
            .records
            .iter()
            .filter(|record| self.matches(record))
            .take(MAX_RESULTS)
            .collect()
    }
}

/// Filter both datasets by `query` and compare their best-rated matches.
pub fn search<'a>(source_a: &'a Dataset, source_b: &'a Dataset, query: &Query) -> SearchOutcome<'a> {
    let a = query.filter(source_a);
    let b = query.filter(source_b);

    let comparison = ComparisonOutcome::decide(Candidate::best_of(&a), Candidate::best_of(&b));

    debug!(
        query = query.as_str(),
        matches_a = a.len(),
        matches_b = b.len(),
        ?comparison,
        "search complete"
    );

    SearchOutcome {
        source_a: a,
        source_b: b,
        comparison,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(&str, f64)]) -> Dataset {
        Dataset::from_records(
            "test",
            rows.iter()
                .map(|(name, rating)| ProductRecord::named(name, *rating))
                .collect(),
        )
    }

    fn query(text: &str) -> Query {
        Query::new(text).unwrap()
    }

    #[test]
    fn empty_query_is_not_a_query() {
        assert!(Query::new("").is_none());
        assert!(Query::new(" ").is_some());
    }

    #[test]
    fn matching_ignores_case() {
        let record = ProductRecord::named("Wireless Mouse", 4.0);
        for text in ["wireless", "WIRELESS", "Mouse", "less mo"] {
            assert!(query(text).matches(&record), "{text} should match");
        }
        assert!(!query("keyboard").matches(&record));
    }

    #[test]
    fn matching_is_literal_not_regex() {
        let record = ProductRecord::named("USB-C (2m) cable", 4.0);
        assert!(query("(2m)").matches(&record));
        assert!(!query("usb.c").matches(&record));
    }

    #[test]
    fn unnamed_records_never_match() {
        let mut record = ProductRecord::named("Mouse", 4.0);
        record.name = None;
        assert!(!query("mouse").matches(&record));
    }

    #[test]
    fn results_keep_dataset_order_and_cap() {
        let rows: Vec<(String, f64)> = (0..30).map(|i| (format!("Mouse {i}"), 1.0 + i as f64 / 10.0)).collect();
        let rows: Vec<(&str, f64)> = rows.iter().map(|(n, r)| (n.as_str(), *r)).collect();
        let a = dataset(&rows);
        let b = dataset(&[]);

        let outcome = search(&a, &b, &query("mouse"));
        assert_eq!(outcome.source_a.len(), MAX_RESULTS);
        assert_eq!(outcome.source_a[0].display_name(), "Mouse 0");
        assert_eq!(outcome.source_a[19].display_name(), "Mouse 19");
        assert!(outcome.source_b.is_empty());
        assert!(!outcome.is_empty());
    }

    #[test]
    fn best_candidate_comes_from_truncated_results() {
        let mut rows: Vec<(String, f64)> = (0..20).map(|i| (format!("Cable {i}"), 3.0)).collect();
        rows.push(("Cable best".to_string(), 5.0));
        let rows: Vec<(&str, f64)> = rows.iter().map(|(n, r)| (n.as_str(), *r)).collect();
        let a = dataset(&rows);
        let b = dataset(&[("Cable other", 4.0)]);

        let outcome = search(&a, &b, &query("cable"));
        assert!(matches!(
            outcome.comparison,
            ComparisonOutcome::SourceBWins { winner } if winner.rating == 4.0
        ));
    }

    #[test]
    fn equal_best_ratings_tie() {
        let a = dataset(&[("Mouse X", 4.2)]);
        let b = dataset(&[("Mouse Y", 4.2)]);

        let outcome = search(&a, &b, &query("Mouse"));
        assert!(matches!(outcome.comparison, ComparisonOutcome::Tie { .. }));

        let swapped = search(&b, &a, &query("Mouse"));
        assert!(matches!(swapped.comparison, ComparisonOutcome::Tie { .. }));
    }

    #[test]
    fn empty_source_is_incomparable() {
        let a = dataset(&[]);
        let b = dataset(&[("Mouse", 4.0)]);

        let outcome = search(&a, &b, &query("Mouse"));
        assert_eq!(outcome.comparison, ComparisonOutcome::Incomparable);
        assert_eq!(outcome.source_b.len(), 1);
    }

    #[test]
    fn swapping_sources_flips_the_winner_label() {
        let a = dataset(&[("Headphones Pro", 4.6), ("Headphones Lite", 3.9)]);
        let b = dataset(&[("headphones basic", 4.1)]);
        let q = query("HEADPHONES");

        let forward = search(&a, &b, &q);
        let reverse = search(&b, &a, &q);

        assert!(matches!(
            forward.comparison,
            ComparisonOutcome::SourceAWins { winner } if winner.record.display_name() == "Headphones Pro"
        ));
        assert_eq!(forward.comparison.swapped(), reverse.comparison);
    }

    #[test]
    fn no_matches_anywhere() {
        let a = dataset(&[("Mouse", 4.0)]);
        let b = dataset(&[("Keyboard", 4.0)]);

        let outcome = search(&a, &b, &query("monitor"));
        assert!(outcome.is_empty());
        assert_eq!(outcome.comparison, ComparisonOutcome::Incomparable);
    }

    #[test]
    fn search_is_repeatable() {
        let a = dataset(&[("Mouse", 4.0)]);
        let b = dataset(&[("Mouse", 3.0)]);
        let q = query("mouse");

        let first = search(&a, &b, &q);
        let second = search(&a, &b, &q);
        assert_eq!(first.comparison, second.comparison);
        assert_eq!(first.source_a, second.source_a);
    }
}
