//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::AnimationPhase;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Points: {}", state.points.len()));

            ui.separator();

            ui.label(status_text(state));

            ui.separator();

            ui.label("Enter: start | Space: reset | Esc: quit");
        });
    });
}

/// Kurzbeschreibung der Animationsphase.
pub fn status_text(state: &AppState) -> String {
    match state.animation.phase() {
        AnimationPhase::Idle => "Idle".to_string(),
        AnimationPhase::Error => "Error: not enough points".to_string(),
        AnimationPhase::Playing => format!(
            "Playing: step {}/{}",
            state.animation.current_step(),
            state.animation.step_count().saturating_sub(1)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::status_text;
    use crate::app::AppState;

    #[test]
    fn idle_status() {
        assert_eq!(status_text(&AppState::new()), "Idle");
    }
}
