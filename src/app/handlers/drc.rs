//! Handler für den Design-Rule-Check.

use crate::app::use_cases;
use crate::app::AppState;

/// Führt den DRC aus und meldet das Ergebnis im Status.
pub fn run(state: &mut AppState) {
    use_cases::drc::run_drc(state);
}
