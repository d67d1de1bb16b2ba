//! Use-Case: Neues Bauteil aus einer Vorlage platzieren.

use crate::app::AppState;
use crate::core::placement::cell_position;
use crate::core::{ComponentTemplate, PLACEMENT_MAX_CELL};
use glam::Vec2;

/// Platziert ein Bauteil an `world_pos` oder, ohne Angabe, auf einer
/// zufälligen Rasterzelle. Gibt die neue Bauteil-ID zurück.
pub fn place_component(
    state: &mut AppState,
    template: &ComponentTemplate,
    world_pos: Option<Vec2>,
) -> String {
    state.record_undo_snapshot();

    let grid = state.options.grid_pitch;
    let position = world_pos
        .unwrap_or_else(|| cell_position(state.placer.next_cell(PLACEMENT_MAX_CELL), grid));
    let id = state.board.allocate_id("comp");
    let component = template.instantiate(id.clone(), position, grid);
    log::info!(
        "Bauteil {} ({}) platziert bei ({:.1}, {:.1})",
        component.name,
        id,
        position.x,
        position.y
    );
    state.board.add_component(component);
    id
}
