//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod export_format;
pub mod options;
mod render_scene;

pub use export_format::ExportFormat;
pub use options::EditorOptions;
pub use options::{GRID_PITCH, HISTORY_DEPTH};
pub use render_scene::{RenderScene, SceneItem, SceneRole, Shape, Stroke, TextAlign};
