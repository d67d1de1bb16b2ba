//! Use-Case: Alle Bauteil-Anker auf das nächste Rasterkreuz setzen.

use crate::app::state::StatusMessage;
use crate::app::AppState;

/// Rastet alle Bauteile auf das Rastermaß ein.
pub fn snap_to_grid(state: &mut AppState) {
    let grid = state.options.grid_pitch;
    if grid <= 0.0 {
        log::warn!("Ungültiges Rastermaß {}", grid);
        return;
    }

    state.record_undo_snapshot();

    for component in state.board.components_mut() {
        component.position = (component.position / grid).round() * grid;
    }

    log::info!("{} Bauteile am Raster ausgerichtet", state.board.component_count());
    state.ui.set_status(StatusMessage::success(format!(
        "Layout: Bauteile am {:.2} mm-Raster ausgerichtet.",
        grid / 10.0
    )));
}
