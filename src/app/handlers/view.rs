//! Handler für Viewport, Spiegelung und Lagen.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt Zoom und Pan zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt mit Faktor (begrenzt auf die konfigurierten Grenzen).
pub fn zoom(state: &mut AppState, factor: f32) {
    use_cases::camera::zoom_by(state, factor);
}

/// Aktualisiert die Größe der Zeichenfläche im State.
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize_canvas(state, size);
}

/// Verschiebt die Ansicht um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Schaltet die horizontale Spiegelung um.
pub fn toggle_flip(state: &mut AppState) {
    use_cases::camera::toggle_flip(state);
}

/// Wechselt die aktive Lage (nur im DOUBLE-Modus).
pub fn toggle_active_layer(state: &mut AppState) {
    use_cases::camera::toggle_active_layer(state);
}

/// Wechselt zwischen SINGLE und DOUBLE.
pub fn toggle_layer_mode(state: &mut AppState) {
    use_cases::camera::toggle_layer_mode(state);
}
