//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    // Ohne Snapshot wird das Kontrollpolygon selbst gezeichnet
    let active_points = match state.animation.active_step() {
        Some(step) => step.to_vec(),
        None => state.control_points(),
    };

    RenderScene {
        control_points: state.control_points(),
        active_points,
        error: state.animation.has_error(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::ControlPoint;

    #[test]
    fn build_without_animation_uses_control_points() {
        let mut state = AppState::new();
        state.points.append(ControlPoint::new(1, 2));
        state.points.append(ControlPoint::new(3, 4));

        let scene = build(&state);

        assert_eq!(scene.active_points, scene.control_points);
        assert!(scene.has_polyline());
        assert!(!scene.error);
    }

    #[test]
    fn build_while_playing_uses_active_step() {
        let mut state = AppState::new();
        state.points.append(ControlPoint::new(0, 0));
        state.points.append(ControlPoint::new(10, 0));
        let points = state.control_points();
        let interval = state.options.animation_interval();
        state
            .animation
            .start(&points, interval, &mut state.scheduler);
        for timer in state.scheduler.advance_by(interval) {
            state.animation.tick(timer);
        }

        let scene = build(&state);

        assert_eq!(scene.control_points.len(), 2);
        assert_eq!(
            scene.active_points,
            vec![
                ControlPoint::new(0, 0),
                ControlPoint::new(2, 0),
                ControlPoint::new(7, 0),
                ControlPoint::new(10, 0)
            ]
        );
    }

    #[test]
    fn single_point_has_no_polyline_but_error_flag_is_forwarded() {
        let mut state = AppState::new();
        state.points.append(ControlPoint::new(5, 5));
        let points = state.control_points();
        let interval = state.options.animation_interval();
        state
            .animation
            .start(&points, interval, &mut state.scheduler);

        let scene = build(&state);

        assert!(scene.error);
        assert!(!scene.has_polyline());
        assert_eq!(scene.control_points.len(), 1);
    }
}
