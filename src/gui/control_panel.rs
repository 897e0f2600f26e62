//! Control Panel Widget
//! Left side panel with dataset selection, search input and load status.

use crate::config::{AppConfig, SourceConfig};
use egui::{Color32, RichText};

/// Which source a browse action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSlot {
    A,
    B,
}

/// Left side control panel with file selection and the search box.
pub struct ControlPanel {
    pub config: AppConfig,
    pub query: String,
    pub status: String,
    pub reload_enabled: bool,
}

impl ControlPanel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            query: String::new(),
            status: "Ready".to_string(),
            reload_enabled: true,
        }
    }

    pub fn source_mut(&mut self, slot: SourceSlot) -> &mut SourceConfig {
        match slot {
            SourceSlot::A => &mut self.config.source_a,
            SourceSlot::B => &mut self.config.source_b,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🛒 Product Comparison")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new(format!(
                    "{} vs {}",
                    self.config.source_a.label, self.config.source_b.label
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Sources =====
        ui.label(RichText::new("📁 Data Sources").size(14.0).strong());
        ui.add_space(5.0);

        for slot in [SourceSlot::A, SourceSlot::B] {
            if Self::source_row(ui, self.source_mut(slot)) {
                action = ControlPanelAction::Browse(slot);
            }
            ui.add_space(5.0);
        }

        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.reload_enabled, |ui| {
                if ui.button("🔄 Reload Datasets").clicked() {
                    action = ControlPanelAction::Reload;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Search =====
        ui.label(RichText::new("🔍 Search for a Product").size(14.0).strong());
        ui.add_space(5.0);
        ui.label("Enter Product Name:");
        ui.add(
            egui::TextEdit::singleline(&mut self.query)
                .hint_text("e.g. wireless mouse")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.starts_with("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// One source row; returns true when Browse was clicked.
    fn source_row(ui: &mut egui::Ui, source: &SourceConfig) -> bool {
        let mut clicked = false;
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&source.label).strong());
                ui.horizontal(|ui| {
                    let file_name = source
                        .path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(file_name).size(12.0))
                        .on_hover_text(source.path.display().to_string());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            clicked = true;
                        }
                    });
                });
            });
        clicked
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    Browse(SourceSlot),
    Reload,
}
