//! Handler für den externen Aktions-Translator.

use crate::app::use_cases;
use crate::app::AppState;

/// Stellt eine Anfrage bereit.
pub fn submit(state: &mut AppState, prompt: &str) {
    use_cases::translator::submit_prompt(state, prompt);
}

/// Wendet eine eingetroffene Antwort an.
pub fn apply(state: &mut AppState, payload: &str) {
    use_cases::translator::apply_response(state, payload);
}

/// Meldet einen Fehlschlag.
pub fn fail(state: &mut AppState, reason: &str) {
    use_cases::translator::fail_request(state, reason);
}
