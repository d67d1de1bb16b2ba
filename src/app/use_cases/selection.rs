//! Use-Case-Funktionen für Bauteil-Selektion und offenen Routing-Start.

use crate::app::AppState;

/// Selektiert ein Bauteil und ersetzt eine vorherige Selektion.
pub fn select_component(state: &mut AppState, component_id: &str) {
    if !state.board.contains_component(component_id) {
        log::warn!("Selektion: Bauteil {} existiert nicht", component_id);
        return;
    }
    state.editor.selected_component = Some(component_id.to_string());
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.editor.selected_component = None;
}

/// Verwirft einen begonnenen Routing-Vorgang.
pub fn cancel_pending_route(state: &mut AppState) {
    if let Some(start) = state.editor.route_start.take() {
        log::debug!("Routing-Start {} verworfen", start);
    }
}
