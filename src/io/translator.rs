//! Datenvertrag des Aktions-Translators.
//!
//! Anfrage: Freitext plus Lagen-Kontext. Antwort: `{actions: [...], message}`,
//! jede Aktion `{type, payload}`. Fehlerhafte Aktionen werden einzeln
//! übersprungen, die Antwort als Ganzes wird nie verworfen.

use crate::core::{ComponentTemplate, Layer, LayerMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anfrage an den Translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorRequest {
    /// Freitext des Benutzers
    pub prompt: String,
    /// Aktueller Lagenmodus
    pub layer_mode: LayerMode,
    /// Aktuell aktive Lage
    pub active_layer: Layer,
}

impl TranslatorRequest {
    /// Kontextzeile, wie sie dem Dienst übergeben wird
    pub fn context_line(&self) -> String {
        format!(
            "User: \"{}\". Context: {}, active layer: {}.",
            self.prompt, self.layer_mode, self.active_layer
        )
    }
}

/// Vorgeschlagene Route mit unscharfen Referenzen (ID oder Name/Label)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteProposal {
    #[serde(rename = "fromComp")]
    pub from_component: String,
    #[serde(rename = "fromPin")]
    pub from_pin: String,
    #[serde(rename = "toComp")]
    pub to_component: String,
    #[serde(rename = "toPin")]
    pub to_pin: String,
}

/// Eine einzelne Translator-Aktion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum TranslatorAction {
    /// Neues Bauteil (Position und Pin-IDs vergibt der Editor)
    #[serde(rename = "ADD_COMPONENT", alias = "ADD_COMP")]
    AddComponent { comp: ComponentTemplate },
    /// Neue Route zwischen zwei vorhandenen Pins
    #[serde(rename = "ADD_ROUTE")]
    AddRoute { route: RouteProposal },
}

/// Geparste Antwort
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatorResponse {
    /// Gültige Aktionen in Originalreihenfolge
    pub actions: Vec<TranslatorAction>,
    /// Anzahl übersprungener (fehlerhafter) Aktionen
    pub skipped: usize,
    /// Freitext-Status des Dienstes
    pub message: Option<String>,
}

/// Parst eine Antwort. Nur nicht lesbares JSON ist ein Fehler.
pub fn parse_response(payload: &str) -> Result<TranslatorResponse> {
    let root: Value =
        serde_json::from_str(payload).context("Translator-Antwort ist kein gültiges JSON")?;

    let message = root
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string);

    let mut response = TranslatorResponse {
        message,
        ..Default::default()
    };

    let Some(raw_actions) = root.get("actions").and_then(Value::as_array) else {
        return Ok(response);
    };

    for raw in raw_actions {
        match serde_json::from_value::<TranslatorAction>(raw.clone()) {
            Ok(action) => response.actions.push(action),
            Err(e) => {
                log::warn!("Translator-Aktion übersprungen: {}", e);
                response.skipped += 1;
            }
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PinKind;

    #[test]
    fn parses_both_action_kinds_and_skips_malformed() {
        let payload = r#"{
            "actions": [
                {"type": "ADD_COMP", "payload": {"comp": {"name": "ESP32", "type": "MCU",
                    "pins": [{"label": "3V3", "type": "VCC"}, {"label": "GND", "type": "GND"}]}}},
                {"type": "ADD_ROUTE", "payload": {"route": {"fromComp": "esp32", "fromPin": "3v3",
                    "toComp": "LED", "toPin": "A"}}},
                {"type": "EXPLODE", "payload": {}},
                {"type": "ADD_ROUTE", "payload": {"route": {"fromComp": "x"}}},
                42
            ],
            "message": "Zwei Aktionen erzeugt"
        }"#;

        let response = parse_response(payload).expect("gültiges JSON");

        assert_eq!(response.actions.len(), 2);
        assert_eq!(response.skipped, 3);
        assert_eq!(response.message.as_deref(), Some("Zwei Aktionen erzeugt"));
        match &response.actions[0] {
            TranslatorAction::AddComponent { comp } => {
                assert_eq!(comp.name, "ESP32");
                assert_eq!(comp.pins[0].kind, PinKind::Power);
                assert_eq!(comp.pins[1].kind, PinKind::Ground);
            }
            other => panic!("unerwartete Aktion {:?}", other),
        }
        assert!(matches!(
            &response.actions[1],
            TranslatorAction::AddRoute { route } if route.to_pin == "A"
        ));
    }

    #[test]
    fn missing_actions_yield_empty_response() {
        let response = parse_response(r#"{"message": ""}"#).expect("gültiges JSON");
        assert!(response.actions.is_empty());
        assert!(response.message.is_none());
    }

    #[test]
    fn unreadable_payload_is_an_error() {
        assert!(parse_response("kein json").is_err());
    }

    #[test]
    fn request_serializes_camel_case_context() {
        let request = TranslatorRequest {
            prompt: "LED an GPIO2".into(),
            layer_mode: LayerMode::Double,
            active_layer: Layer::Bottom,
        };
        let json = serde_json::to_string(&request).expect("serialisierbar");
        assert_eq!(
            json,
            r#"{"prompt":"LED an GPIO2","layerMode":"double","activeLayer":"bottom"}"#
        );
        assert_eq!(
            request.context_line(),
            "User: \"LED an GPIO2\". Context: DOUBLE, active layer: bottom."
        );
    }
}
