//! Seitenleiste: Bauteil-Bibliothek, Projektdatei und Translator.

use super::library::builtin_templates;
use crate::app::{AppIntent, AppState};
use crate::core::ComponentTemplate;
use std::path::PathBuf;

/// UI-lokaler Zustand der Seitenleiste (Eingabefelder)
#[derive(Debug)]
pub struct SidePanelState {
    templates: Vec<ComponentTemplate>,
    /// Pfad für Speichern/Laden
    pub project_path: String,
    /// Freitext für den Translator
    pub prompt: String,
    /// Eingefügte Translator-Antwort (JSON)
    pub response: String,
    /// Zuletzt gestellte Anfrage als JSON
    pub last_request: Option<String>,
}

impl SidePanelState {
    /// Erstellt den Startzustand mit eingebauter Bibliothek.
    pub fn new() -> Self {
        Self {
            templates: builtin_templates(),
            project_path: "projekt.json".to_string(),
            prompt: String::new(),
            response: String::new(),
            last_request: None,
        }
    }

    /// Aktueller Projektpfad
    pub fn project_path(&self) -> PathBuf {
        PathBuf::from(self.project_path.trim())
    }
}

impl Default for SidePanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_side_panel(
    ctx: &egui::Context,
    state: &AppState,
    panel: &mut SidePanelState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("side_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Bibliothek");
            for template in &panel.templates {
                let label = format!("{} ({})", template.name, template.component_type);
                if ui.button(label).clicked() {
                    events.push(AppIntent::PlaceComponentRequested {
                        template: template.clone(),
                        world_pos: None,
                    });
                }
            }

            ui.separator();
            ui.heading("Projekt");
            ui.text_edit_singleline(&mut panel.project_path);
            ui.horizontal(|ui| {
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveProjectRequested {
                        path: panel.project_path(),
                    });
                }
                if ui.button("Laden").clicked() {
                    events.push(AppIntent::LoadProjectRequested {
                        path: panel.project_path(),
                    });
                }
            });

            ui.separator();
            ui.heading("Translator");
            ui.add(
                egui::TextEdit::multiline(&mut panel.prompt)
                    .hint_text("z.B. ESP32 mit LED an IO2 verbinden")
                    .desired_rows(3),
            );
            if ui
                .add_enabled(
                    !state.ui.translator_pending,
                    egui::Button::new("Anfrage stellen"),
                )
                .clicked()
            {
                events.push(AppIntent::TranslatorPromptSubmitted {
                    prompt: std::mem::take(&mut panel.prompt),
                });
            }

            if let Some(request) = &panel.last_request {
                ui.label("Letzte Anfrage:");
                ui.code(request);
            }

            if state.ui.translator_pending {
                ui.label("Antwort einfügen:");
                ui.add(egui::TextEdit::multiline(&mut panel.response).desired_rows(4));
                ui.horizontal(|ui| {
                    if ui.button("Anwenden").clicked() {
                        events.push(AppIntent::TranslatorResponseReceived {
                            payload: std::mem::take(&mut panel.response),
                        });
                    }
                    if ui.button("Abbrechen").clicked() {
                        events.push(AppIntent::TranslatorRequestFailed {
                            reason: "vom Benutzer abgebrochen".to_string(),
                        });
                    }
                });
            }
        });

    events
}
