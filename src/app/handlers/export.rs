//! Handler für den Druck-Export.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ExportFormat;

/// Exportiert die aktive Lage und propagiert Schreibfehler an den Aufrufer.
pub fn export(state: &mut AppState, format: ExportFormat) -> anyhow::Result<()> {
    use_cases::export::export_print(state, format)?;
    Ok(())
}
