use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{Board, GridPlacer, PlacementSource};
use crate::shared::EditorOptions;

use super::{EditorState, UiState, ViewState};

/// Hauptzustand der Anwendung (eine Editor-Sitzung)
pub struct AppState {
    /// Bauteile und Routes
    pub board: Board,
    /// View-State
    pub view: ViewState,
    /// Selektion und Pointer-Automat
    pub editor: EditorState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Rasterzellen für automatisch platzierte Bauteile
    pub placer: Box<dyn PlacementSource>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let mut view = ViewState::new();
        view.viewport.reset(options.reset_scale);
        Self {
            board: Board::new(),
            view,
            editor: EditorState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            placer: Box::new(GridPlacer::from_entropy()),
        }
    }

    /// Ersetzt die Platzierungsquelle (z.B. deterministisch in Tests)
    pub fn with_placer(mut self, placer: impl PlacementSource + 'static) -> Self {
        self.placer = Box::new(placer);
        self
    }

    /// Gibt die Anzahl der Bauteile zurück (für UI-Anzeige)
    pub fn component_count(&self) -> usize {
        self.board.component_count()
    }

    /// Gibt die Anzahl der Routes zurück (für UI-Anzeige)
    pub fn route_count(&self) -> usize {
        self.board.route_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
