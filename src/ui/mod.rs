//! UI-Layer mit egui.
//!
//! Die UI erzeugt ausschließlich `AppIntent`s und liest den State nur.

pub mod canvas;
pub mod input;
mod keyboard;
mod library;
pub mod side_panel;
pub mod status;
pub mod toolbar;

pub use canvas::paint_scene;
pub use input::InputState;
pub use library::builtin_templates;
pub use side_panel::{render_side_panel, SidePanelState};
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Sammelt globale Tastatur-Shortcuts.
pub fn collect_keyboard_intents(
    ctx: &egui::Context,
    project_path: &std::path::Path,
) -> Vec<crate::app::AppIntent> {
    keyboard::collect_keyboard_intents(ctx, project_path)
}
