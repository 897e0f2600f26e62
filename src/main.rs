//! Product Compare - desktop dashboard
//!
//! Search two product catalogs by name and see which one has the best-rated match.

use eframe::egui;
use product_compare::config::DEFAULT_CONFIG_FILE;
use product_compare::gui::CompareApp;
use product_compare::{logging, AppConfig};
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    logging::init(false);

    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    let config = AppConfig::load_or_default(&config_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default configuration");
        AppConfig::default()
    });

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Product Comparison"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Product Comparison",
        options,
        Box::new(|cc| Ok(Box::new(CompareApp::new(cc, config, config_path)))),
    )
}
