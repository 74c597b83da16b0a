//! Handler für Kontrollpunkt-Editing: Anhängen und Drag.

use crate::app::AppState;
use crate::core::ControlPoint;

/// Hängt einen neuen Kontrollpunkt an.
pub fn add_control_point(state: &mut AppState, pos: ControlPoint) {
    if state.animation.is_playing() {
        log::warn!("Punkt ({}, {}) ignoriert: Animation läuft", pos.x, pos.y);
        return;
    }
    let index = state.points.append(pos);
    log::info!("Kontrollpunkt #{} bei ({}, {})", index, pos.x, pos.y);
}

/// Beginnt einen Drag auf dem Punkt mit Index `index`.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if state.animation.is_playing() {
        log::warn!("Drag auf #{} ignoriert: Animation läuft", index);
        return;
    }
    if index >= state.points.len() {
        log::warn!(
            "Drag auf #{} ignoriert: nur {} Punkte",
            index,
            state.points.len()
        );
        return;
    }
    state.selection.dragged_index = Some(index);
    log::debug!("Drag-Start auf #{}", index);
}

/// Setzt den gezogenen Punkt an die neue Position.
///
/// Reihenfolge und Anzahl der Punkte bleiben unverändert.
pub fn update_drag(state: &mut AppState, pos: ControlPoint) {
    let Some(index) = state.selection.dragged_index else {
        return;
    };
    if !state.points.set_position(index, pos) {
        log::warn!("Drag-Index #{} existiert nicht mehr, Selektion aufgehoben", index);
        state.selection.clear();
        return;
    }
    log::debug!("Drag #{} → ({}, {})", index, pos.x, pos.y);
}

/// Beendet den Drag und hebt die Selektion auf.
pub fn end_drag(state: &mut AppState) {
    state.selection.clear();
}
