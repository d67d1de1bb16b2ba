//! Toolbar für Ansicht, Lagen, Prüfung und Export.

use crate::app::{AppIntent, AppState};
use crate::core::LayerMode;
use crate::shared::ExportFormat;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── History ──
            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷ Redo"))
                .on_hover_text("Ctrl+Y")
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            // ── Ansicht ──
            if ui.button("+").on_hover_text("Hineinzoomen").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("−").on_hover_text("Herauszoomen").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui.button("Reset").on_hover_text("Ansicht zurücksetzen (0)").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }
            if ui
                .selectable_label(state.view.viewport.flipped, "Spiegeln")
                .on_hover_text("Ansicht von unten (F)")
                .clicked()
            {
                events.push(AppIntent::ToggleFlipRequested);
            }

            ui.separator();

            // ── Lagen ──
            let mode_label = match state.view.layer_mode {
                LayerMode::Single => "SINGLE",
                LayerMode::Double => "DOUBLE",
            };
            if ui.button(mode_label).on_hover_text("Lagenmodus (M)").clicked() {
                events.push(AppIntent::ToggleLayerModeRequested);
            }
            let layer_label = format!("Lage: {}", state.view.routing_layer().as_str().to_uppercase());
            if ui
                .add_enabled(
                    state.view.layer_mode == LayerMode::Double,
                    egui::Button::new(layer_label),
                )
                .on_hover_text("Aktive Lage wechseln (L)")
                .clicked()
            {
                events.push(AppIntent::ToggleActiveLayerRequested);
            }

            ui.separator();

            // ── Bearbeitung & Prüfung ──
            if ui.button("Raster").on_hover_text("Am Raster ausrichten (G)").clicked() {
                events.push(AppIntent::SnapToGridRequested);
            }
            if ui.button("DRC").on_hover_text("Abstände prüfen (D)").clicked() {
                events.push(AppIntent::DrcRequested);
            }

            ui.separator();

            // ── Export ──
            ui.menu_button("Export", |ui| {
                for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Gerber] {
                    if ui.button(format.to_string()).clicked() {
                        events.push(AppIntent::ExportRequested { format });
                        ui.close();
                    }
                }
            });
        });
    });

    events
}
