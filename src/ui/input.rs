//! Canvas-Input-Handling: Pointer, Mausrad und Größe → AppIntent.
//!
//! Screen-Positionen werden relativ zur Mitte der Zeichenfläche übergeben.
//! Was unter dem Pointer liegt, entscheidet erst das Intent-Mapping.

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand der Zeichenfläche
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde auf der Zeichenfläche gedrückt und ist noch unten
    pointer_down: bool,
    last_canvas_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_intents(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        let size = [rect.width(), rect.height()];
        if self.last_canvas_size != Some(size) {
            self.last_canvas_size = Some(size);
            events.push(AppIntent::CanvasResized { size });
        }

        let (pressed, released, delta, scroll_y) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta(),
                i.raw_scroll_delta.y,
            )
        });

        if pressed && !self.pointer_down {
            if let Some(pos) = response.hover_pos() {
                let rel = pos - rect.center();
                self.pointer_down = true;
                events.push(AppIntent::PointerPressed {
                    screen_pos: Vec2::new(rel.x, rel.y),
                });
            }
        }

        if self.pointer_down && delta != egui::Vec2::ZERO {
            events.push(AppIntent::PointerMoved {
                delta: Vec2::new(delta.x, delta.y),
            });
        }

        if released && self.pointer_down {
            self.pointer_down = false;
            events.push(AppIntent::PointerReleased);
        }

        // egui: positives y = nach oben scrollen; Intent: positives delta_y zoomt heraus
        if scroll_y != 0.0 && response.hovered() {
            events.push(AppIntent::WheelScrolled { delta_y: -scroll_y });
        }

        events
    }
}
