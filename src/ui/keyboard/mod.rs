//! Keyboard-Shortcuts für den Editor.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Einzeltasten greifen nur, wenn kein Textfeld den Fokus hat.

use crate::app::AppIntent;
use crate::shared::ExportFormat;
use std::path::Path;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ctx: &egui::Context, project_path: &Path) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed, key_s_pressed, key_o_pressed) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::O),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::SaveProjectRequested {
            path: project_path.to_path_buf(),
        });
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::LoadProjectRequested {
            path: project_path.to_path_buf(),
        });
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        events.push(AppIntent::EscapePressed);
    }

    if modifiers.command || ctx.wants_keyboard_input() {
        return events;
    }

    let pressed = |key: egui::Key| ctx.input(|i| i.key_pressed(key));

    if pressed(egui::Key::R) {
        events.push(AppIntent::RotateSelectedRequested);
    }
    if pressed(egui::Key::Delete) || pressed(egui::Key::Backspace) {
        events.push(AppIntent::DeleteSelectedRequested);
    }
    if pressed(egui::Key::D) {
        events.push(AppIntent::DrcRequested);
    }
    if pressed(egui::Key::G) {
        events.push(AppIntent::SnapToGridRequested);
    }
    if pressed(egui::Key::L) {
        events.push(AppIntent::ToggleActiveLayerRequested);
    }
    if pressed(egui::Key::M) {
        events.push(AppIntent::ToggleLayerModeRequested);
    }
    if pressed(egui::Key::F) {
        events.push(AppIntent::ToggleFlipRequested);
    }
    if pressed(egui::Key::E) {
        let format = if modifiers.shift {
            ExportFormat::Jpeg
        } else {
            ExportFormat::Png
        };
        events.push(AppIntent::ExportRequested { format });
    }
    if pressed(egui::Key::Plus) || pressed(egui::Key::Equals) {
        events.push(AppIntent::ZoomInRequested);
    }
    if pressed(egui::Key::Minus) {
        events.push(AppIntent::ZoomOutRequested);
    }
    if pressed(egui::Key::Num0) {
        events.push(AppIntent::ResetViewRequested);
    }

    events
}

#[cfg(test)]
mod tests;
