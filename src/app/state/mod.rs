//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::EditorState;
pub use ui::{StatusKind, StatusMessage, UiState};
pub use view::ViewState;
