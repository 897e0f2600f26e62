//! GUI module - User interface components

mod app;
mod control_panel;
mod results_view;

pub use app::CompareApp;
pub use control_panel::{ControlPanel, ControlPanelAction, SourceSlot};
pub use results_view::{ResultsState, ResultsView};
