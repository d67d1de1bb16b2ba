//! Use-Case: Monochromen Druck-Export erzeugen und schreiben.

use crate::app::render_scene;
use crate::app::state::StatusMessage;
use crate::app::AppState;
use crate::render;
use crate::shared::ExportFormat;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Exportiert die aktive Lage als Rasterbild.
///
/// Gibt den Pfad der geschriebenen Datei zurück. Ohne bekannte Zeichenfläche
/// wird nichts erzeugt.
pub fn export_print(state: &mut AppState, format: ExportFormat) -> Result<Option<PathBuf>> {
    if !format.is_raster() {
        log::info!("Export {} angefordert (nicht verfügbar)", format);
        state.ui.set_status(StatusMessage::info(format!(
            "{}-Export ist noch nicht verfügbar.",
            format
        )));
        return Ok(None);
    }

    if state.view.canvas_size.is_none() {
        log::debug!("Export abgebrochen: keine Zeichenfläche vorhanden");
        return Ok(None);
    }

    let scene = render::monochrome_scene(&render_scene::build(state));
    let bytes = render::rasterize(&scene, &state.options, format)?;

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let file_name = render::export_file_name(
        state.view.active_layer,
        state.view.viewport.flipped,
        millis,
        format,
    );
    let path = if state.options.export_directory.is_empty() {
        PathBuf::from(&file_name)
    } else {
        PathBuf::from(&state.options.export_directory).join(&file_name)
    };

    std::fs::write(&path, &bytes)
        .with_context(|| format!("Export konnte nicht geschrieben werden: {}", path.display()))?;

    log::info!(
        "Export geschrieben: {} ({} Elemente, {} Bytes)",
        path.display(),
        scene.items.len(),
        bytes.len()
    );
    state.ui.last_export_path = Some(path.clone());
    state.ui.set_status(StatusMessage::success(format!(
        "Druckvorlage bereit: {}",
        file_name
    )));
    Ok(Some(path))
}
