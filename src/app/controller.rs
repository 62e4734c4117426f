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
            // === Persistenz ===
            AppCommand::LoadStore => handlers::persistence::load(state)?,
            AppCommand::SaveStore => handlers::persistence::save(state)?,

            // === Navigation & Takt ===
            AppCommand::SwitchMode { to } => handlers::navigation::switch_mode(state, to),
            AppCommand::AdvanceFrame => handlers::navigation::advance_frame(state),
            AppCommand::RequestExit => handlers::navigation::request_exit(state),

            // === Formen ===
            AppCommand::CommitField { target, text } => {
                handlers::shapes::commit_field(state, target, &text)
            }
            AppCommand::ClearShapes => handlers::shapes::clear(state),
            AppCommand::Measure { kind } => handlers::shapes::measure(state, kind),

            // === Ansicht ===
            AppCommand::ShowCoordinatePlane => handlers::view::show_coordinate_plane(state),
            AppCommand::HideCoordinatePlane => handlers::view::hide_coordinate_plane(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),

            // === Nachzeichnen ===
            AppCommand::BeginPointerStroke => handlers::trace::begin_pointer_stroke(state),
            AppCommand::EndPointerStroke => handlers::trace::end_pointer_stroke(state),
            AppCommand::TracePointer { pos } => handlers::trace::trace_pointer(state, pos),
            AppCommand::ApplyDeviceIncrement { increment } => {
                handlers::trace::apply_device_increment(state, increment)
            }
            AppCommand::SetDeviceConnected { connected } => {
                handlers::trace::set_device_connected(state, connected)
            }
            AppCommand::ClearTrace => handlers::trace::clear(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
