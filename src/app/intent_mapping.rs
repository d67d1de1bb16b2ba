//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Pointer-Intents werden hier per Hit-Test und aktuellem Interaktionsmodus
//! in konkrete Gesten aufgelöst. Das Mapping selbst mutiert nie.

use super::interaction::{InteractionMode, PointerTarget};
use super::use_cases::hit_test;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // ── Zeichenfläche & Pointer ─────────────────────────────
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::PointerPressed { screen_pos } => {
            match hit_test::pick(state, screen_pos) {
                PointerTarget::Empty => vec![AppCommand::ClearSelection, AppCommand::BeginPan],
                PointerTarget::Component(component_id) => vec![
                    AppCommand::SelectComponent {
                        component_id: component_id.clone(),
                    },
                    AppCommand::BeginComponentDrag { component_id },
                ],
                PointerTarget::Pin(pin) => vec![AppCommand::PinClick { pin }],
                PointerTarget::RotateHandle(component_id) => {
                    vec![AppCommand::RotateComponent { component_id }]
                }
                PointerTarget::DeleteHandle(component_id) => {
                    vec![AppCommand::DeleteComponent { component_id }]
                }
            }
        }
        AppIntent::PointerMoved { delta } => {
            if delta == glam::Vec2::ZERO {
                return vec![];
            }
            match &state.editor.interaction {
                InteractionMode::Idle => vec![],
                InteractionMode::Panning => vec![AppCommand::PanView { delta }],
                InteractionMode::DraggingComponent { .. } => {
                    vec![AppCommand::DragComponent {
                        screen_delta: delta,
                    }]
                }
            }
        }
        AppIntent::PointerReleased => {
            if state.editor.interaction.is_idle() {
                vec![]
            } else {
                vec![AppCommand::EndPointerInteraction]
            }
        }
        AppIntent::WheelScrolled { delta_y } => {
            if delta_y > 0.0 {
                vec![AppCommand::ZoomView {
                    factor: state.options.wheel_zoom_out_factor,
                }]
            } else if delta_y < 0.0 {
                vec![AppCommand::ZoomView {
                    factor: state.options.wheel_zoom_in_factor,
                }]
            } else {
                vec![]
            }
        }

        // ── Ansicht ─────────────────────────────────────────────
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomView {
            factor: state.options.button_zoom_in_factor,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomView {
            factor: state.options.button_zoom_out_factor,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ToggleFlipRequested => vec![AppCommand::ToggleFlip],
        AppIntent::ToggleActiveLayerRequested => vec![AppCommand::ToggleActiveLayer],
        AppIntent::ToggleLayerModeRequested => vec![AppCommand::ToggleLayerMode],

        // ── Bearbeitung ─────────────────────────────────────────
        AppIntent::RotateSelectedRequested => state
            .editor
            .selected_component
            .clone()
            .map(|component_id| vec![AppCommand::RotateComponent { component_id }])
            .unwrap_or_default(),
        AppIntent::DeleteSelectedRequested => state
            .editor
            .selected_component
            .clone()
            .map(|component_id| vec![AppCommand::DeleteComponent { component_id }])
            .unwrap_or_default(),
        AppIntent::RotateComponentRequested { component_id } => {
            vec![AppCommand::RotateComponent { component_id }]
        }
        AppIntent::DeleteComponentRequested { component_id } => {
            vec![AppCommand::DeleteComponent { component_id }]
        }
        AppIntent::PinClicked { pin } => vec![AppCommand::PinClick { pin }],
        AppIntent::EscapePressed => {
            vec![AppCommand::ClearSelection, AppCommand::CancelPendingRoute]
        }
        AppIntent::PlaceComponentRequested {
            template,
            world_pos,
        } => vec![AppCommand::PlaceComponent {
            template,
            world_pos,
        }],
        AppIntent::SnapToGridRequested => vec![AppCommand::SnapToGrid],

        // ── Prüfung & Ausgabe ───────────────────────────────────
        AppIntent::DrcRequested => vec![AppCommand::RunDrc],
        AppIntent::ExportRequested { format } => vec![AppCommand::Export { format }],
        AppIntent::SaveProjectRequested { path } => vec![AppCommand::SaveProject { path }],
        AppIntent::LoadProjectRequested { path } => vec![AppCommand::LoadProject { path }],

        // ── Translator ──────────────────────────────────────────
        AppIntent::TranslatorPromptSubmitted { prompt } => {
            vec![AppCommand::SubmitTranslatorPrompt { prompt }]
        }
        AppIntent::TranslatorResponseReceived { payload } => {
            vec![AppCommand::ApplyTranslatorResponse { payload }]
        }
        AppIntent::TranslatorRequestFailed { reason } => {
            vec![AppCommand::FailTranslatorRequest { reason }]
        }

        // ── History ─────────────────────────────────────────────
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}
