//! Keyboard-Shortcuts für den Canvas.
//!
//! Enter startet, Leertaste setzt zurück, Escape beendet.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let (key_enter_pressed, key_space_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::Escape),
        )
    });

    keys_to_intents(key_enter_pressed, key_space_pressed, key_escape_pressed)
}

fn keys_to_intents(enter: bool, space: bool, escape: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if enter {
        events.push(AppIntent::StartRequested);
    }
    if space {
        events.push(AppIntent::ResetRequested);
    }
    if escape {
        events.push(AppIntent::ExitRequested);
    }
    events
}
