//! Pointer-Zustandsautomat für Pan, Bauteil-Drag und Klick-Gesten.
//!
//! Zustände: `Idle`, `Panning`, `DraggingComponent`. Pin-Klicks und die
//! Rotations-/Lösch-Schaltflächen sind eigene Gesten und verlassen `Idle` nicht.

use crate::core::PinRef;

/// Was unter dem Pointer liegt (Ergebnis des Hit-Tests)
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// Freie Zeichenfläche
    Empty,
    /// Körper eines Bauteils
    Component(String),
    /// Pin eines Bauteils
    Pin(PinRef),
    /// Rotations-Schaltfläche des selektierten Bauteils
    RotateHandle(String),
    /// Lösch-Schaltfläche des selektierten Bauteils
    DeleteHandle(String),
}

/// Aktueller Zustand der Pointer-Interaktion
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Pointer-Deltas verschieben die Ansicht
    Panning,
    /// Pointer-Deltas verschieben ein Bauteil
    DraggingComponent {
        component_id: String,
        /// Undo-Snapshot für diesen Drag bereits angelegt
        snapshot_taken: bool,
    },
}

impl InteractionMode {
    /// Folgezustand nach Pointer-Down auf `target`.
    pub fn on_press(target: &PointerTarget) -> Self {
        match target {
            PointerTarget::Empty => InteractionMode::Panning,
            PointerTarget::Component(id) => InteractionMode::DraggingComponent {
                component_id: id.clone(),
                snapshot_taken: false,
            },
            PointerTarget::Pin(_)
            | PointerTarget::RotateHandle(_)
            | PointerTarget::DeleteHandle(_) => InteractionMode::Idle,
        }
    }

    /// Folgezustand nach Pointer-Up (aus jedem Zustand)
    pub fn on_release(&self) -> Self {
        InteractionMode::Idle
    }

    /// `true` im Ruhezustand
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    /// ID des gerade gezogenen Bauteils
    pub fn dragged_component(&self) -> Option<&str> {
        match self {
            InteractionMode::DraggingComponent { component_id, .. } => Some(component_id),
            _ => None,
        }
    }
}
