//! Use-Case: Projekt speichern und laden.

use crate::app::state::StatusMessage;
use crate::app::AppState;
use crate::io::project::{self, ProjectRecord};
use anyhow::Result;
use std::path::Path;

/// Speichert Bauteile, Routes und Lagenmodus (letzter Schreibvorgang gewinnt).
pub fn save_project(state: &mut AppState, path: &Path) -> Result<()> {
    let record = ProjectRecord::from_board(&state.board, state.view.layer_mode);
    project::save(path, &record)?;

    log::info!(
        "Projekt gespeichert: {} ({} Bauteile, {} Routes)",
        path.display(),
        state.board.component_count(),
        state.board.route_count()
    );
    state
        .ui
        .set_status(StatusMessage::success("Projekt gespeichert."));
    Ok(())
}

/// Lädt ein Projekt. Der bisherige Stand bleibt per Undo erreichbar.
pub fn load_project(state: &mut AppState, path: &Path) -> Result<()> {
    let (board, layer_mode) = project::load(path)?.into_board()?;

    state.record_undo_snapshot();
    state.board = board;
    state.view.layer_mode = layer_mode;
    state.editor.drop_dangling_references(&state.board);

    log::info!(
        "Projekt geladen: {} ({} Bauteile, {} Routes)",
        path.display(),
        state.board.component_count(),
        state.board.route_count()
    );
    state
        .ui
        .set_status(StatusMessage::success("Projekt geladen."));
    Ok(())
}
