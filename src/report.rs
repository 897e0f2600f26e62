//! Report Module
//! Text and JSON rendering of a search outcome for terminal output.

use crate::data::ProductRecord;
use crate::search::{ComparisonOutcome, SearchOutcome};

pub const NO_PRODUCTS: &str = "No products found for the given name.";
pub const NOT_COMPARABLE: &str =
    "Comparison not possible as one of the platforms has no matching products.";

/// Sentence describing the comparison, using the source labels.
pub fn comparison_message(outcome: &ComparisonOutcome<'_>, label_a: &str, label_b: &str) -> String {
    match outcome {
        ComparisonOutcome::SourceAWins { winner } => format!(
            "Best Product: {} - {} (Rating: {})",
            label_a,
            winner.record.display_name(),
            winner.rating
        ),
        ComparisonOutcome::SourceBWins { winner } => format!(
            "Best Product: {} - {} (Rating: {})",
            label_b,
            winner.record.display_name(),
            winner.rating
        ),
        ComparisonOutcome::Tie { .. } => format!(
            "Both {} and {} have similar products with comparable ratings.",
            label_a, label_b
        ),
        ComparisonOutcome::Incomparable => NOT_COMPARABLE.to_string(),
    }
}

fn record_lines(record: &ProductRecord) -> Vec<String> {
    let mut lines = vec![
        format!("  - {}", record.display_name()),
        format!("    Rating: {}", record.rating),
        format!("    Price: ₹{}", record.actual_price.as_deref().unwrap_or("-")),
    ];
    if let Some(url) = record.image_url() {
        lines.push(format!("    Image: {}", url));
    }
    if let Some(link) = record.link.as_deref() {
        lines.push(format!("    Link: {}", link));
    }
    lines
}

fn source_lines(label: &str, results: &[&ProductRecord]) -> Vec<String> {
    let mut lines = vec![format!("### {} Products", label)];
    if results.is_empty() {
        lines.push(format!("No products found on {}.", label));
    }
    lines.extend(results.iter().flat_map(|record| record_lines(record)));
    lines.push(String::new());
    lines
}

/// Plain-text report: both result lists followed by the comparison.
pub fn render_text(outcome: &SearchOutcome<'_>, label_a: &str, label_b: &str) -> String {
    if outcome.is_empty() {
        return format!("{}\n", NO_PRODUCTS);
    }

    let mut lines = vec!["Search Results".to_string(), String::new()];
    lines.extend(source_lines(label_a, &outcome.source_a));
    lines.extend(source_lines(label_b, &outcome.source_b));
    lines.push("Comparison Result".to_string());
    lines.push(comparison_message(&outcome.comparison, label_a, label_b));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_json(outcome: &SearchOutcome<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::search::{search, Query};

    fn datasets() -> (Dataset, Dataset) {
        let mut mouse = ProductRecord::named("Wireless Mouse", 4.4);
        mouse.actual_price = Some("799".to_string());
        mouse.link = Some("https://shop-a/mouse".to_string());
        (
            Dataset::from_records("A", vec![mouse]),
            Dataset::from_records("B", vec![ProductRecord::named("Mouse Pad", 4.1)]),
        )
    }

    #[test]
    fn text_report_names_the_winner() {
        let (a, b) = datasets();
        let outcome = search(&a, &b, &Query::new("mouse").unwrap());
        let text = render_text(&outcome, "Flipkart", "Amazon");

        assert!(text.contains("### Flipkart Products"));
        assert!(text.contains("Price: ₹799"));
        assert!(text.contains("Link: https://shop-a/mouse"));
        assert!(text.contains("Best Product: Flipkart - Wireless Mouse (Rating: 4.4)"));
    }

    #[test]
    fn text_report_layout() {
        let (a, b) = datasets();
        let outcome = search(&a, &b, &Query::new("mouse").unwrap());
        let text = render_text(&outcome, "Flipkart", "Amazon");

        assert!(text.starts_with("Search Results\n\n### Flipkart Products\n  - Wireless Mouse\n"));
        assert!(text.contains("\n\n### Amazon Products\n  - Mouse Pad\n    Rating: 4.1\n    Price: ₹-\n"));
        assert!(text.ends_with("Comparison Result\nBest Product: Flipkart - Wireless Mouse (Rating: 4.4)\n"));
    }

    #[test]
    fn text_report_without_matches() {
        let (a, b) = datasets();
        let outcome = search(&a, &b, &Query::new("monitor").unwrap());
        assert_eq!(render_text(&outcome, "Flipkart", "Amazon"), format!("{NO_PRODUCTS}\n"));
    }

    #[test]
    fn text_report_one_sided() {
        let (a, b) = datasets();
        let outcome = search(&a, &b, &Query::new("wireless").unwrap());
        let text = render_text(&outcome, "Flipkart", "Amazon");
        assert!(text.contains("No products found on Amazon."));
        assert!(text.contains(NOT_COMPARABLE));
    }

    #[test]
    fn json_report_has_comparison_tag() {
        let (a, b) = datasets();
        let outcome = search(&a, &b, &Query::new("mouse").unwrap());
        let json: serde_json::Value = serde_json::from_str(&render_json(&outcome).unwrap()).unwrap();
        assert_eq!(json["comparison"]["outcome"], "source_a_wins");
        assert_eq!(json["source_a"][0]["name"], "Wireless Mouse");
    }
}
