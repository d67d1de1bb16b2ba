//! Handler für Bauteil-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ComponentTemplate;

/// Dreht ein Bauteil um 90°.
pub fn rotate(state: &mut AppState, component_id: &str) {
    use_cases::editing::rotate_component(state, component_id);
}

/// Löscht ein Bauteil samt Routes.
pub fn delete(state: &mut AppState, component_id: &str) {
    use_cases::editing::delete_component(state, component_id);
}

/// Platziert ein Bauteil aus einer Vorlage.
pub fn place(state: &mut AppState, template: &ComponentTemplate, world_pos: Option<glam::Vec2>) {
    use_cases::editing::place_component(state, template, world_pos);
}

/// Rastet alle Bauteile ein.
pub fn snap_to_grid(state: &mut AppState) {
    use_cases::editing::snap_to_grid(state);
}
