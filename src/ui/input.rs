//! Canvas-Input-Handling: Maus-Events → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::ControlPoint;

/// Verwaltet den Input-Zustand für den Canvas (gedrückte Primärtaste).
#[derive(Default)]
pub struct InputState {
    primary_held: bool,
    last_pos: Option<ControlPoint>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_held: false,
            last_pos: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Canvas-Ecke in ganze
    /// Pixel umgerechnet.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);

        let (pressed, any_released, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.any_released(),
                i.pointer.interact_pos(),
            )
        });
        let canvas_pos = pointer_pos
            .filter(|p| response.rect.contains(*p) || self.primary_held)
            .map(|p| to_canvas(p, response.rect));

        if pressed && response.hovered() {
            if let Some(pos) = canvas_pos {
                events.push(AppIntent::PointerPressed { pos });
                self.primary_held = true;
                self.last_pos = Some(pos);
            }
        }

        if self.primary_held {
            if let Some(pos) = canvas_pos.filter(|p| Some(*p) != self.last_pos) {
                events.push(AppIntent::PointerMoved { pos });
                self.last_pos = Some(pos);
            }
        }

        // Jede losgelassene Taste beendet einen Drag
        if any_released {
            events.push(AppIntent::PointerReleased);
            self.primary_held = false;
            self.last_pos = None;
        }

        events
    }
}

/// Bildschirmposition → ganzzahlige Canvas-Koordinate.
pub fn to_canvas(screen: egui::Pos2, canvas_rect: egui::Rect) -> ControlPoint {
    let local = screen - canvas_rect.min;
    ControlPoint::new(local.x as i32, local.y as i32)
}
