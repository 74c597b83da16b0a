use crate::core::{ControlPoint, TimerHandle};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    /// Primäre Maustaste auf dem Canvas gedrückt
    PointerPressed { pos: ControlPoint },
    /// Zeiger bei gedrückter Taste bewegt
    PointerMoved { pos: ControlPoint },
    /// Maustaste losgelassen
    PointerReleased,
    /// Animation starten (Enter)
    StartRequested,
    /// Alles zurücksetzen (Leertaste)
    ResetRequested,
    /// Anwendung beenden (Escape)
    ExitRequested,
    /// Periodischer Timer ist fällig geworden
    TimerFired { timer: TimerHandle },
}
