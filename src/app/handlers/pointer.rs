//! Handler für Pan- und Drag-Gesten.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet eine Pan-Geste.
pub fn begin_pan(state: &mut AppState) {
    use_cases::pointer::begin_pan(state);
}

/// Startet den Drag eines Bauteils.
pub fn begin_component_drag(state: &mut AppState, component_id: &str) {
    use_cases::pointer::begin_component_drag(state, component_id);
}

/// Verschiebt das gezogene Bauteil.
pub fn drag_component(state: &mut AppState, screen_delta: glam::Vec2) {
    use_cases::pointer::drag_component(state, screen_delta);
}

/// Beendet die laufende Geste.
pub fn end_interaction(state: &mut AppState) {
    use_cases::pointer::end_interaction(state);
}
