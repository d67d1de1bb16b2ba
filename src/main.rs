//! PCB-Layout-Editor.
//!
//! Interaktiver 2D-Editor für Leiterplatten-Layouts mit egui.
//! Bauteile platzieren, Pins verbinden, Abstände prüfen, Druckvorlage exportieren.

use eframe::egui;
use pcb_layout_editor::app::StatusMessage;
use pcb_layout_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "PCB-Layout-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("PCB-Layout-Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "PCB-Layout-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    side_panel: ui::SidePanelState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            side_panel: ui::SidePanelState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::CanvasResized { .. }));

        self.process_events(events);

        self.forward_translator_request();

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_side_panel(
            ctx,
            &self.state,
            &mut self.side_panel,
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_intents(ui, &response));

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(ui.painter(), rect, &scene);

                if self.state.board.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Leere Platine. Bauteile links aus der Bibliothek wählen.",
                        egui::FontId::proportional(18.0),
                        egui::Color32::from_gray(160),
                    );
                }
            });

        events.extend(ui::collect_keyboard_intents(
            ctx,
            &self.side_panel.project_path(),
        ));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state
                    .ui
                    .set_status(StatusMessage::error(format!("Fehler: {:#}", e)));
            }
        }
    }

    /// Übergibt eine bereitgestellte Translator-Anfrage an die Seitenleiste.
    fn forward_translator_request(&mut self) {
        let Some(request) = self.state.ui.take_translator_request() else {
            return;
        };
        match serde_json::to_string_pretty(&request) {
            Ok(json) => {
                log::info!("Translator-Anfrage bereit: {}", json);
                self.side_panel.last_request = Some(json);
            }
            Err(e) => log::error!("Translator-Anfrage nicht serialisierbar: {}", e),
        }
    }
}
