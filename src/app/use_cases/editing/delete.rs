//! Use-Case: Bauteil löschen (inkl. aller Routes, die es referenzieren).

use crate::app::AppState;

/// Löscht ein Bauteil und atomar alle daran hängenden Routes.
pub fn delete_component(state: &mut AppState, component_id: &str) {
    if !state.board.contains_component(component_id) {
        log::warn!("Löschen: Bauteil {} existiert nicht", component_id);
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    if let Some((component, routes)) = state.board.remove_component(component_id) {
        log::info!(
            "Bauteil {} gelöscht ({} Routes entfernt)",
            component.name,
            routes.len()
        );
    }

    if state.editor.selected_component.as_deref() == Some(component_id) {
        state.editor.selected_component = None;
    }
    state.editor.drop_dangling_references(&state.board);
}
