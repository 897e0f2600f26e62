//! Results View Widget
//! Central panel: two columns of product cards and the comparison banner.

use crate::data::{Catalog, ProductRecord};
use crate::report::{comparison_message, NO_PRODUCTS};
use crate::search::{search, ComparisonOutcome, Query};
use egui::{Color32, RichText, ScrollArea};
use tracing::warn;

const CARD_SPACING: f32 = 10.0;
const SUCCESS: Color32 = Color32::from_rgb(40, 167, 69);
const INFO: Color32 = Color32::from_rgb(23, 162, 184);
const WARNING: Color32 = Color32::from_rgb(255, 193, 7);
const ERROR: Color32 = Color32::from_rgb(220, 53, 69);

/// What the central panel has to show this frame.
pub enum ResultsState<'a> {
    Loading,
    Failed(&'a str),
    Ready(&'a Catalog),
}

pub struct ResultsView;

impl ResultsView {
    pub fn show(ui: &mut egui::Ui, state: ResultsState<'_>, query: &str) {
        match state {
            ResultsState::Loading => {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            }
            ResultsState::Failed(error) => {
                ui.label(
                    RichText::new(format!("Error loading datasets: {}", error))
                        .size(16.0)
                        .color(ERROR),
                );
            }
            ResultsState::Ready(catalog) => Self::show_results(ui, catalog, query),
        }
    }

    fn show_results(ui: &mut egui::Ui, catalog: &Catalog, query: &str) {
        let Some(query) = Query::new(query) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Enter a product name to search").size(20.0));
            });
            return;
        };

        let outcome = search(&catalog.source_a, &catalog.source_b, &query);
        let (label_a, label_b) = (&catalog.source_a.label, &catalog.source_b.label);

        if outcome.is_empty() {
            ui.label(RichText::new(NO_PRODUCTS).size(16.0).color(WARNING));
            return;
        }

        // Comparison banner on top so it stays visible while scrolling
        ui.label(RichText::new("Comparison Result").size(18.0).strong());
        let color = match outcome.comparison {
            ComparisonOutcome::SourceAWins { .. } | ComparisonOutcome::SourceBWins { .. } => SUCCESS,
            _ => INFO,
        };
        ui.label(
            RichText::new(comparison_message(&outcome.comparison, label_a, label_b))
                .size(15.0)
                .color(color),
        );
        ui.add_space(CARD_SPACING);
        ui.separator();

        ui.label(RichText::new("Search Results").size(18.0).strong());
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.columns(2, |columns| {
                    Self::source_column(&mut columns[0], label_a, &outcome.source_a);
                    Self::source_column(&mut columns[1], label_b, &outcome.source_b);
                });
            });
    }

    fn source_column(ui: &mut egui::Ui, label: &str, results: &[&ProductRecord]) {
        ui.label(RichText::new(format!("{} Products", label)).size(16.0).strong());
        ui.add_space(5.0);

        if results.is_empty() {
            ui.label(format!("No products found on {}.", label));
            return;
        }

        for record in results {
            Self::product_card(ui, record);
            ui.add_space(CARD_SPACING);
        }
    }

    fn product_card(ui: &mut egui::Ui, record: &ProductRecord) {
        egui::Frame::none()
            .rounding(5.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(120)))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if let Some(url) = record.image_url() {
                        ui.hyperlink_to("🖼 Image", url);
                    }
                    ui.label(RichText::new(record.display_name()).size(14.0).strong());
                    ui.label(format!("Rating: {}", record.rating));
                    ui.label(format!(
                        "Price: ₹{}",
                        record.actual_price.as_deref().unwrap_or("-")
                    ));

                    if let Some(link) = record.link.as_deref() {
                        if ui.button("🔗 View Product").clicked() {
                            if let Err(e) = open::that(link) {
                                warn!(link, error = %e, "could not open product link");
                            }
                        }
                    }
                });
            });
    }
}
