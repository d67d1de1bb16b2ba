//! Handler für Selektion und offenen Routing-Start.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert ein Bauteil.
pub fn select(state: &mut AppState, component_id: &str) {
    use_cases::selection::select_component(state, component_id);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Verwirft einen offenen Routing-Start.
pub fn cancel_pending_route(state: &mut AppState) {
    use_cases::selection::cancel_pending_route(state);
}
