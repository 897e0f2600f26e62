//! Product Compare Main Application
//! Main window with control panel and side-by-side results.

use crate::config::AppConfig;
use crate::data::Catalog;
use crate::gui::control_panel::SourceSlot;
use crate::gui::results_view::ResultsState;
use crate::gui::{ControlPanel, ControlPanelAction, ResultsView};
use egui::{Color32, RichText, SidePanel, TopBottomPanel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{info, warn};

/// Dataset loading result from background thread
enum LoadResult {
    Complete(Catalog),
    Error(String),
}

/// Main application window.
pub struct CompareApp {
    control_panel: ControlPanel,
    config_path: PathBuf,
    catalog: Option<Catalog>,
    load_error: Option<String>,

    // Async dataset loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl CompareApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, config_path: PathBuf) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(config),
            config_path,
            catalog: None,
            load_error: None,
            load_rx: None,
            is_loading: false,
        };
        app.start_loading();
        app
    }

    /// Load both datasets on a background thread.
    fn start_loading(&mut self) {
        if self.is_loading {
            return;
        }

        let config = self.control_panel.config.clone();
        info!(
            source_a = %config.source_a.path.display(),
            source_b = %config.source_b.path.display(),
            "loading datasets"
        );

        self.catalog = None;
        self.load_error = None;
        self.is_loading = true;
        self.control_panel.reload_enabled = false;
        self.control_panel.set_status("Loading datasets...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match Catalog::load(&config) {
                Ok(catalog) => LoadResult::Complete(catalog),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for dataset loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete(catalog)) => {
                self.control_panel.set_status(&format!(
                    "Loaded {} {} and {} {} products",
                    catalog.source_a.len(),
                    catalog.source_a.label,
                    catalog.source_b.len(),
                    catalog.source_b.label,
                ));
                self.catalog = Some(catalog);
                self.finish_loading();
            }
            Ok(LoadResult::Error(error)) => {
                self.control_panel.set_status(&format!("Error: {}", error));
                self.load_error = Some(error);
                self.finish_loading();
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.load_error = Some("loader thread stopped unexpectedly".to_string());
                self.finish_loading();
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.control_panel.reload_enabled = true;
    }

    /// Handle CSV file selection for one source, then reload.
    fn handle_browse(&mut self, slot: SourceSlot) {
        if self.is_loading {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        self.control_panel.source_mut(slot).path = path;
        if let Err(e) = self.control_panel.config.save(&self.config_path) {
            warn!(error = %e, "could not save configuration");
        }
        self.start_loading();
    }
}

impl eframe::App for CompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::Browse(slot) => self.handle_browse(slot),
                        ControlPanelAction::Reload => self.start_loading(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Compare products easily and find the best deals!")
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });
        });

        // Central panel - Results
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = match (&self.catalog, &self.load_error) {
                (_, Some(error)) => ResultsState::Failed(error),
                (Some(catalog), None) => ResultsState::Ready(catalog),
                (None, None) => ResultsState::Loading,
            };
            ResultsView::show(ui, state, &self.control_panel.query);
        });
    }
}
