use crate::app::interaction::InteractionMode;
use crate::core::{Board, PinRef};

/// Selektion, offener Routing-Start und Pointer-Zustand
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktuell selektiertes Bauteil
    pub selected_component: Option<String>,
    /// Erster Pin eines begonnenen Routings
    pub route_start: Option<PinRef>,
    /// Zustand des Pointer-Automaten
    pub interaction: InteractionMode,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (nichts selektiert, Idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft Selektion, Routing-Start und laufenden Drag, sofern sie
    /// auf nicht mehr existierende Bauteile oder Pins zeigen.
    pub fn drop_dangling_references(&mut self, board: &Board) {
        if self
            .selected_component
            .as_deref()
            .is_some_and(|id| !board.contains_component(id))
        {
            self.selected_component = None;
        }
        if self
            .route_start
            .as_ref()
            .is_some_and(|pin| board.resolve_pin(pin).is_none())
        {
            self.route_start = None;
        }
        if self
            .interaction
            .dragged_component()
            .is_some_and(|id| !board.contains_component(id))
        {
            self.interaction = InteractionMode::Idle;
        }
    }
}
