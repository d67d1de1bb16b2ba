//! Use-Case-Funktionen für den Pointer-Automaten (Pan und Bauteil-Drag).

use crate::app::interaction::{InteractionMode, PointerTarget};
use crate::app::AppState;
use glam::Vec2;

/// Beginnt eine Pan-Geste.
pub fn begin_pan(state: &mut AppState) {
    state.editor.interaction = InteractionMode::on_press(&PointerTarget::Empty);
}

/// Beginnt den Drag eines Bauteils.
///
/// Der Undo-Snapshot entsteht erst bei der ersten echten Bewegung, damit ein
/// reiner Klick zum Selektieren keinen leeren History-Eintrag erzeugt.
pub fn begin_component_drag(state: &mut AppState, component_id: &str) {
    if !state.board.contains_component(component_id) {
        log::warn!("Drag: Bauteil {} existiert nicht", component_id);
        state.editor.interaction = InteractionMode::Idle;
        return;
    }
    state.editor.interaction =
        InteractionMode::on_press(&PointerTarget::Component(component_id.to_string()));
}

/// Verschiebt das gezogene Bauteil um ein Screen-Delta.
///
/// Das Delta wird durch den Zoom geteilt und bei Spiegelung in X negiert,
/// sodass das Bauteil sichtbar dem Pointer folgt.
pub fn drag_component(state: &mut AppState, screen_delta: Vec2) {
    let (component_id, snapshot_taken) = match &state.editor.interaction {
        InteractionMode::DraggingComponent {
            component_id,
            snapshot_taken,
        } => (component_id.clone(), *snapshot_taken),
        _ => return,
    };
    if screen_delta == Vec2::ZERO {
        return;
    }
    if !state.board.contains_component(&component_id) {
        state.editor.interaction = InteractionMode::Idle;
        return;
    }

    if !snapshot_taken {
        state.record_undo_snapshot();
        if let InteractionMode::DraggingComponent { snapshot_taken, .. } =
            &mut state.editor.interaction
        {
            *snapshot_taken = true;
        }
    }

    let world_delta = state.view.viewport.screen_delta_to_world(screen_delta);
    if let Some(component) = state.board.component_mut(&component_id) {
        component.position += world_delta;
    }
}

/// Beendet die laufende Pointer-Geste.
pub fn end_interaction(state: &mut AppState) {
    if let InteractionMode::DraggingComponent {
        component_id,
        snapshot_taken: true,
    } = &state.editor.interaction
    {
        if let Some(component) = state.board.component(component_id) {
            log::info!(
                "Bauteil {} verschoben nach ({:.1}, {:.1})",
                component.name,
                component.position.x,
                component.position.y
            );
        }
    }
    state.editor.interaction = state.editor.interaction.on_release();
}
