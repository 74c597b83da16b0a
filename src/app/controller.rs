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
            // === Editing ===
            AppCommand::AddControlPoint { pos } => handlers::editing::add_control_point(state, pos),
            AppCommand::BeginDrag { index } => handlers::editing::begin_drag(state, index),
            AppCommand::UpdateDrag { pos } => handlers::editing::update_drag(state, pos),
            AppCommand::EndDrag => handlers::editing::end_drag(state),

            // === Animation ===
            AppCommand::StartAnimation => handlers::animation::start(state),
            AppCommand::ResetAnimation => handlers::animation::reset(state),
            AppCommand::AnimationTick { timer } => handlers::animation::tick(state, timer),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Schiebt die Scheduler-Uhr vor und verarbeitet alle fälligen Ticks.
    ///
    /// Gibt zurück, ob mindestens ein Tick angefallen ist (Repaint nötig).
    pub fn advance_clock(
        &mut self,
        state: &mut AppState,
        elapsed: std::time::Duration,
    ) -> anyhow::Result<bool> {
        let fired = state.scheduler.advance_to(elapsed);
        let any = !fired.is_empty();
        for timer in fired {
            self.handle_intent(state, AppIntent::TimerFired { timer })?;
        }
        Ok(any)
    }

    /// Verarbeitet einen Frame: erst die Uhr auf `elapsed` ziehen, dann die Intents.
    ///
    /// Die Reihenfolge ist wichtig: ein Start nach längerer Pause plant seinen
    /// Timer sonst gegen eine veraltete Uhrzeit und holt die Pause als Ticks nach.
    /// Gibt zurück, ob ein Repaint nötig ist.
    pub fn handle_frame(
        &mut self,
        state: &mut AppState,
        elapsed: std::time::Duration,
        intents: Vec<AppIntent>,
    ) -> anyhow::Result<bool> {
        let ticked = self.advance_clock(state, elapsed)?;
        let has_intents = !intents.is_empty();
        for intent in intents {
            self.handle_intent(state, intent)?;
        }
        Ok(ticked || has_intents)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
