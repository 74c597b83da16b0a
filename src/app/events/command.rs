use crate::core::{ControlPoint, TimerHandle};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Neuen Kontrollpunkt ans Ende anhängen
    AddControlPoint { pos: ControlPoint },
    /// Drag auf bestehendem Punkt beginnen
    BeginDrag { index: usize },
    /// Gezogenen Punkt an neue Position setzen
    UpdateDrag { pos: ControlPoint },
    /// Drag beenden, Selektion aufheben
    EndDrag,
    /// Schritte berechnen und Wiedergabe starten
    StartAnimation,
    /// Punkte, Schritte, Fehler und Timer zurücksetzen
    ResetAnimation,
    /// Nächsten Schritt anzeigen (nur für den aktiven Timer)
    AnimationTick { timer: TimerHandle },
    /// Anwendung beenden
    RequestExit,
}
