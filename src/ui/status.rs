//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, StatusKind};
use crate::core::LayerMode;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Bauteile: {} | Routes: {}",
                state.component_count(),
                state.route_count()
            ));

            ui.separator();

            let viewport = &state.view.viewport;
            ui.label(format!(
                "Zoom: {:.2}x | Pan: ({:.0}, {:.0})",
                viewport.scale, viewport.offset.x, viewport.offset.y
            ));

            ui.separator();

            let layer = match state.view.layer_mode {
                LayerMode::Single => "SINGLE (TOP)".to_string(),
                LayerMode::Double => {
                    format!("DOUBLE ({})", state.view.active_layer.as_str().to_uppercase())
                }
            };
            ui.label(format!("Lage: {}", layer));

            if viewport.flipped {
                ui.separator();
                ui.label("Gespiegelt");
            }

            if let Some(pin) = &state.editor.route_start {
                ui.separator();
                ui.label(format!("Route ab {}", pin));
            }

            ui.separator();
            ui.label(format!(
                "Undo: {} | Redo: {}",
                state.history.undo_len(),
                state.history.redo_len()
            ));

            if state.ui.translator_pending {
                ui.separator();
                ui.spinner();
            }

            if let Some(status) = &state.ui.status {
                ui.separator();
                let color = match status.kind {
                    StatusKind::Info => egui::Color32::LIGHT_BLUE,
                    StatusKind::Success => egui::Color32::LIGHT_GREEN,
                    StatusKind::Error => egui::Color32::LIGHT_RED,
                };
                ui.label(egui::RichText::new(&status.text).color(color));
            }
        });
    });
}
