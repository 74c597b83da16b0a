use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::ControlPoint;

use super::map_intent_to_commands;

fn state_with_points(points: &[(i32, i32)]) -> AppState {
    let mut state = AppState::new();
    for &(x, y) in points {
        state.points.append(ControlPoint::new(x, y));
    }
    state
}

#[test]
fn pointer_press_on_empty_canvas_adds_point() {
    let state = AppState::new();
    let pos = ControlPoint::new(40, 40);

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });

    assert_eq!(commands, vec![AppCommand::AddControlPoint { pos }]);
}

#[test]
fn pointer_press_near_point_begins_drag_on_first_in_order() {
    let state = state_with_points(&[(100, 100), (0, 0), (3, 0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: ControlPoint::new(2, 0),
        },
    );

    assert_eq!(commands, vec![AppCommand::BeginDrag { index: 1 }]);
}

#[test]
fn pointer_press_respects_configured_threshold() {
    let mut state = state_with_points(&[(0, 0)]);
    state.options.drag_threshold = 3.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: ControlPoint::new(5, 0),
        },
    );

    assert!(matches!(commands[0], AppCommand::AddControlPoint { .. }));
}

#[test]
fn pointer_press_while_playing_maps_to_nothing() {
    let mut state = state_with_points(&[(0, 0), (100, 0)]);
    let points = state.control_points();
    let interval = state.options.animation_interval();
    state
        .animation
        .start(&points, interval, &mut state.scheduler);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: ControlPoint::new(300, 300),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_move_without_drag_maps_to_nothing() {
    let state = state_with_points(&[(0, 0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: ControlPoint::new(1, 1),
        },
    );

    assert!(commands.is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::PointerReleased).is_empty());
}

#[test]
fn pointer_move_while_dragging_maps_to_update() {
    let mut state = state_with_points(&[(0, 0)]);
    state.selection.dragged_index = Some(0);
    let pos = ControlPoint::new(9, 9);

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerMoved { pos }),
        vec![AppCommand::UpdateDrag { pos }]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerReleased),
        vec![AppCommand::EndDrag]
    );
}

#[test]
fn key_intents_map_one_to_one() {
    let state = AppState::new();

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::StartRequested),
        vec![AppCommand::StartAnimation]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ResetRequested),
        vec![AppCommand::ResetAnimation]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ExitRequested),
        vec![AppCommand::RequestExit]
    );
}
