//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            // Während der Wiedergabe keine Punkt-Edits per Klick
            if state.animation.is_playing() {
                return Vec::new();
            }
            match state.points.find_near(pos, state.options.drag_threshold) {
                Some(index) => vec![AppCommand::BeginDrag { index }],
                None => vec![AppCommand::AddControlPoint { pos }],
            }
        }
        AppIntent::PointerMoved { pos } => {
            if state.selection.is_dragging() {
                vec![AppCommand::UpdateDrag { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => {
            if state.selection.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::StartRequested => vec![AppCommand::StartAnimation],
        AppIntent::ResetRequested => vec![AppCommand::ResetAnimation],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::TimerFired { timer } => vec![AppCommand::AnimationTick { timer }],
    }
}

#[cfg(test)]
mod tests;
