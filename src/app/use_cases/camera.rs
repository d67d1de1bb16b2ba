//! Use-Case-Funktionen für Viewport-Steuerung (Pan, Zoom, Spiegelung, Lagen).

use crate::app::AppState;

/// Setzt Zoom und Pan zurück. Die Spiegelung bleibt erhalten.
pub fn reset_view(state: &mut AppState) {
    state.view.viewport.reset(state.options.reset_scale);
    log::debug!("Ansicht zurückgesetzt");
}

/// Multipliziert den Zoom, begrenzt auf die konfigurierten Grenzen.
pub fn zoom_by(state: &mut AppState, factor: f32) {
    state.view.viewport.zoom_by_clamped(
        factor,
        state.options.zoom_min,
        state.options.zoom_max,
    );
}

/// Verschiebt die Ansicht um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.viewport.pan(delta);
}

/// Aktualisiert die Größe der Zeichenfläche.
pub fn resize_canvas(state: &mut AppState, size: [f32; 2]) {
    if size[0] <= 0.0 || size[1] <= 0.0 {
        state.view.canvas_size = None;
        return;
    }
    state.view.canvas_size = Some(size);
}

/// Schaltet die horizontale Spiegelung um.
pub fn toggle_flip(state: &mut AppState) {
    let viewport = &mut state.view.viewport;
    viewport.flipped = !viewport.flipped;
    log::info!("Spiegelung: {}", if viewport.flipped { "an" } else { "aus" });
}

/// Schaltet die aktive Lage um. Im SINGLE-Modus gesperrt.
pub fn toggle_active_layer(state: &mut AppState) {
    if state.view.layer_mode == crate::core::LayerMode::Single {
        log::debug!("Lagenwechsel im SINGLE-Modus ignoriert");
        return;
    }
    state.view.active_layer = state.view.active_layer.toggled();
    log::info!("Aktive Lage: {}", state.view.active_layer);
}

/// Wechselt zwischen einseitigem und doppelseitigem Modus.
pub fn toggle_layer_mode(state: &mut AppState) {
    state.view.layer_mode = state.view.layer_mode.toggled();
    log::info!("Lagenmodus: {}", state.view.layer_mode);
}
