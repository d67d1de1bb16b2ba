//! Handler für Projekt-Speichern und -Laden.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Speichert das Projekt.
pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::project::save_project(state, path)
}

/// Lädt ein Projekt.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::project::load_project(state, path)
}
