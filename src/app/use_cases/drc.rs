//! Use-Case: Design-Rule-Check ausführen und Ergebnis melden.

use crate::app::state::StatusMessage;
use crate::app::AppState;
use crate::core::{check_clearance, DrcReport};

/// Prüft alle Bauteil-Paare auf Mindestabstand. Liest nur.
pub fn run_drc(state: &mut AppState) -> DrcReport {
    let report = check_clearance(state.board.components(), state.options.drc_clearance());

    if report.is_clean() {
        log::info!("DRC bestanden ({} Bauteile)", state.board.component_count());
        state.ui.set_status(StatusMessage::success(
            "DRC bestanden: keine Überlappungen gefunden.",
        ));
    } else {
        let pairs = report.pair_names().join(", ");
        log::warn!("DRC: {} Kollisionen: {}", report.collisions.len(), pairs);
        state.ui.set_status(StatusMessage::error(format!(
            "DRC fehlgeschlagen: Kollision bei: {}.",
            pairs
        )));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StatusKind;
    use crate::core::Component;
    use glam::Vec2;

    #[test]
    fn drc_reports_pairs_without_touching_board() {
        let mut state = AppState::new();
        state.board.add_component(Component::new("a", "U1", "IC", Vec2::ZERO, Vec::new()));
        state.board.add_component(Component::new(
            "b",
            "R1",
            "Resistor",
            Vec2::new(30.0, 50.0),
            Vec::new(),
        ));
        let before = state.board.clone();

        let report = run_drc(&mut state);

        assert_eq!(report.pair_names(), vec!["U1 & R1".to_string()]);
        assert_eq!(state.board, before);
        assert_eq!(state.ui.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
        assert!(!state.can_undo());
    }
}
