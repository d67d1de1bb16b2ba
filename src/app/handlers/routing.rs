//! Handler für Pin-Klicks im Routing-Ablauf.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PinRef;

/// Verarbeitet einen Pin-Klick (Start, Abbruch oder Route anlegen).
pub fn pin_click(state: &mut AppState, pin: PinRef) {
    use_cases::routing::pin_click(state, pin);
}
