use crate::core::Board;

/// Snapshot des editierbaren Platineninhalts (Bauteile + Routes).
///
/// Ein Snapshot ist eine tiefe, unabhängige Kopie. Spätere Änderungen am
/// Live-Board wirken nie auf bereits gespeicherte Snapshots zurück.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Vollständige Kopie des Boards
    pub board: Board,
}

impl Snapshot {
    /// Erstellt einen Snapshot durch Deep-Clone des Boards.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            board: state.board.clone(),
        }
    }

    /// Stellt den Snapshot wieder her. Selektion und offener Routing-Start
    /// werden verworfen, falls sie ins Leere zeigen.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.board = self.board;
        state.editor.drop_dangling_references(&state.board);
    }
}

/// Begrenzter Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen Snapshot auf den Undo-Stack und leert den Redo-Stack.
    /// Ist die Tiefe erreicht, fällt der älteste Eintrag heraus.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            self.redo_stack.clear();
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl verfügbarer Undo-Schritte
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl verfügbarer Redo-Schritte
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
