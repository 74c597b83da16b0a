//! Handler für Start, Reset und Ticks der Schritt-Animation.

use crate::app::AppState;
use crate::core::{StartOutcome, TimerHandle};

/// Startet die Animation aus den aktuellen Kontrollpunkten.
///
/// Zu wenige Punkte setzen nur das Fehlerflag; das ist ein Zustand, kein Fehler.
pub fn start(state: &mut AppState) {
    let interval = state.options.animation_interval();
    let outcome = state
        .animation
        .start(state.points.as_slice(), interval, &mut state.scheduler);

    match outcome {
        StartOutcome::Started { step_count } => log::info!(
            "Animation gestartet: {} Punkte, {} Schritte, Intervall {:?}",
            state.points.len(),
            step_count,
            interval
        ),
        StartOutcome::InsufficientPoints { available } => log::warn!(
            "Animation nicht gestartet: {} Punkt(e), mindestens 2 nötig",
            available
        ),
    }
}

/// Setzt Punkte, Selektion, Schritte, Fehler und Timer zurück.
pub fn reset(state: &mut AppState) {
    state.animation.reset(&mut state.scheduler);
    state.points.clear();
    state.selection.clear();
    log::info!("Zurückgesetzt");
}

/// Schaltet auf den nächsten Schritt, sofern `timer` der aktive Timer ist.
pub fn tick(state: &mut AppState, timer: TimerHandle) {
    if state.animation.tick(timer) {
        log::debug!(
            "Schritt {}/{}",
            state.animation.current_step(),
            state.animation.step_count()
        );
    } else {
        log::debug!("Veralteter Tick von Timer {} verworfen", timer.id());
    }
}
