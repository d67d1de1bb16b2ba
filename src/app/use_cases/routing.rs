//! Use-Case: Pin-Klick-Geste zum Anlegen von Routes.
//!
//! Erster Klick merkt den Start-Pin, ein Klick auf denselben Pin bricht ab,
//! ein Klick auf einen anderen Pin legt die Route an.

use crate::app::AppState;
use crate::core::{routing, PinRef};

/// Verarbeitet einen Klick auf einen Pin.
pub fn pin_click(state: &mut AppState, pin: PinRef) {
    if state.board.resolve_pin(&pin).is_none() {
        log::warn!("Pin {} existiert nicht", pin);
        return;
    }

    let Some(start) = state.editor.route_start.take() else {
        log::debug!("Routing-Start: {}", pin);
        state.editor.route_start = Some(pin);
        return;
    };

    if start == pin {
        log::debug!("Routing abgebrochen (gleicher Pin {})", pin);
        return;
    }

    if state.board.resolve_pin(&start).is_none() {
        // Start-Bauteil wurde inzwischen gelöscht: neuer Start
        state.editor.route_start = Some(pin);
        return;
    }

    state.record_undo_snapshot();

    let layer = state.view.routing_layer();
    let style = state.options.route_style();
    match routing::create_route(&mut state.board, &start, &pin, layer, &style) {
        Some(id) => log::info!("Route {} angelegt: {} → {} ({})", id, start, pin, layer),
        None => log::warn!("Route {} → {} nicht auflösbar", start, pin),
    }
}
