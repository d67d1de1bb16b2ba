//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Ansicht ===
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),
            AppCommand::PanView { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomView { factor } => handlers::view::zoom(state, factor),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ToggleFlip => handlers::view::toggle_flip(state),
            AppCommand::ToggleActiveLayer => handlers::view::toggle_active_layer(state),
            AppCommand::ToggleLayerMode => handlers::view::toggle_layer_mode(state),

            // === Pointer-Automat ===
            AppCommand::BeginPan => handlers::pointer::begin_pan(state),
            AppCommand::BeginComponentDrag { component_id } => {
                handlers::pointer::begin_component_drag(state, &component_id)
            }
            AppCommand::DragComponent { screen_delta } => {
                handlers::pointer::drag_component(state, screen_delta)
            }
            AppCommand::EndPointerInteraction => handlers::pointer::end_interaction(state),

            // === Selektion ===
            AppCommand::SelectComponent { component_id } => {
                handlers::selection::select(state, &component_id)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::CancelPendingRoute => handlers::selection::cancel_pending_route(state),

            // === Bearbeitung ===
            AppCommand::RotateComponent { component_id } => {
                handlers::editing::rotate(state, &component_id)
            }
            AppCommand::DeleteComponent { component_id } => {
                handlers::editing::delete(state, &component_id)
            }
            AppCommand::PinClick { pin } => handlers::routing::pin_click(state, pin),
            AppCommand::PlaceComponent {
                template,
                world_pos,
            } => handlers::editing::place(state, &template, world_pos),
            AppCommand::SnapToGrid => handlers::editing::snap_to_grid(state),

            // === Prüfung & Ausgabe ===
            AppCommand::RunDrc => handlers::drc::run(state),
            AppCommand::Export { format } => handlers::export::export(state, format)?,
            AppCommand::SaveProject { path } => handlers::project::save(state, &path)?,
            AppCommand::LoadProject { path } => handlers::project::load(state, &path)?,

            // === Translator ===
            AppCommand::SubmitTranslatorPrompt { prompt } => {
                handlers::translator::submit(state, &prompt)
            }
            AppCommand::ApplyTranslatorResponse { payload } => {
                handlers::translator::apply(state, &payload)
            }
            AppCommand::FailTranslatorRequest { reason } => {
                handlers::translator::fail(state, &reason)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
