//! Use-Case: Translator-Anfragen stellen und Antworten anwenden.
//!
//! Eine Antwort wird immer gegen das Board zum Zeitpunkt ihres Eintreffens
//! angewendet, nicht gegen den Stand bei der Anfrage. Alle Aktionen laufen
//! zuerst auf einer Arbeitskopie; das Live-Board wird nur bei mindestens
//! einer angewendeten Aktion ersetzt (mit Undo-Snapshot davor).

use crate::app::state::StatusMessage;
use crate::app::AppState;
use crate::core::placement::cell_position;
use crate::core::{routing, Board, PLACEMENT_MAX_CELL};
use crate::io::translator::{self, TranslatorAction, TranslatorRequest};

/// Stellt eine Anfrage bereit und wechselt in den Bearbeitungszustand.
pub fn submit_prompt(state: &mut AppState, prompt: &str) {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        log::debug!("Leere Translator-Anfrage ignoriert");
        return;
    }
    if state.ui.translator_pending {
        log::debug!("Translator-Anfrage läuft bereits");
        return;
    }

    let request = TranslatorRequest {
        prompt: prompt.to_string(),
        layer_mode: state.view.layer_mode,
        active_layer: state.view.active_layer,
    };
    log::info!("Translator-Anfrage: {}", request.context_line());
    state.ui.translator_pending = true;
    state.ui.outgoing_translator_request = Some(request);
    state
        .ui
        .set_status(StatusMessage::info("Translator: Anfrage wird verarbeitet …"));
}

/// Wendet eine Translator-Antwort an. Gibt die Anzahl angewendeter Aktionen zurück.
pub fn apply_response(state: &mut AppState, payload: &str) -> usize {
    state.ui.translator_pending = false;

    let response = match translator::parse_response(payload) {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Translator-Antwort unlesbar: {:#}", e);
            state.ui.set_status(StatusMessage::error(
                "Translator: Antwort konnte nicht gelesen werden.",
            ));
            return 0;
        }
    };

    let mut working = state.board.clone();
    let mut applied = 0;
    for action in &response.actions {
        if apply_action(state, &mut working, action) {
            applied += 1;
        }
    }

    if applied > 0 {
        state.record_undo_snapshot();
        state.board = working;
        log::info!(
            "Translator: {} Aktionen angewendet, {} übersprungen",
            applied,
            response.actions.len() - applied + response.skipped
        );
    }

    let text = response
        .message
        .unwrap_or_else(|| "Translator hat die Anfrage verarbeitet.".to_string());
    state.ui.set_status(if applied > 0 {
        StatusMessage::success(text)
    } else {
        StatusMessage::info(text)
    });
    applied
}

/// Meldet einen Fehlschlag der Anfrage. Das Board bleibt unverändert.
pub fn fail_request(state: &mut AppState, reason: &str) {
    state.ui.translator_pending = false;
    log::warn!("Translator-Anfrage fehlgeschlagen: {}", reason);
    state
        .ui
        .set_status(StatusMessage::error("Translator hat nicht geantwortet."));
}

fn apply_action(state: &mut AppState, working: &mut Board, action: &TranslatorAction) -> bool {
    match action {
        TranslatorAction::AddComponent { comp } => {
            let grid = state.options.grid_pitch;
            let position = cell_position(state.placer.next_cell(PLACEMENT_MAX_CELL), grid);
            let id = working.allocate_id("comp");
            working.add_component(comp.instantiate(id, position, grid));
            true
        }
        TranslatorAction::AddRoute { route } => {
            let from = routing::resolve_fuzzy(working, &route.from_component, &route.from_pin);
            let to = routing::resolve_fuzzy(working, &route.to_component, &route.to_pin);
            let (Some(from), Some(to)) = (from, to) else {
                log::warn!(
                    "Translator-Route {}:{} → {}:{} nicht auflösbar",
                    route.from_component,
                    route.from_pin,
                    route.to_component,
                    route.to_pin
                );
                return false;
            };
            if from == to {
                log::debug!("Translator-Route auf denselben Pin {} ignoriert", from);
                return false;
            }
            let layer = state.view.routing_layer();
            let style = state.options.route_style();
            routing::create_route(working, &from, &to, layer, &style).is_some()
        }
    }
}
