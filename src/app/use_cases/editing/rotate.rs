//! Use-Case: Bauteil um 90° im Uhrzeigersinn drehen.

use crate::app::AppState;

/// Dreht ein Bauteil um +90° (modulo 360).
pub fn rotate_component(state: &mut AppState, component_id: &str) {
    if !state.board.contains_component(component_id) {
        log::warn!("Rotation: Bauteil {} existiert nicht", component_id);
        return;
    }

    state.record_undo_snapshot();

    if let Some(component) = state.board.component_mut(component_id) {
        component.rotation = component.rotation.next();
        log::info!(
            "Bauteil {} gedreht auf {}°",
            component.name,
            component.rotation.degrees()
        );
    }
}
