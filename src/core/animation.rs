//! Zustandsmaschine der Schritt-Animation (Idle / Error / Playing).

use super::chaikin::{self, Step};
use super::scheduler::{Scheduler, TimerHandle};
use super::ControlPoint;
use std::sync::Arc;
use std::time::Duration;

/// Mindestanzahl Kontrollpunkte für einen Start.
pub const MIN_POINTS_FOR_ANIMATION: usize = 2;

/// Abgeleitete Phase der Animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// Keine Schritte, kein Fehler
    #[default]
    Idle,
    /// Start mit zu wenigen Punkten versucht
    Error,
    /// Schritte werden zyklisch abgespielt
    Playing,
}

/// Ergebnis eines Start-Versuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Snapshot berechnet, Timer läuft
    Started { step_count: usize },
    /// Zu wenige Punkte, Fehlerflag gesetzt
    InsufficientPoints { available: usize },
}

/// Besitzt den Schritt-Snapshot, den aktuellen Index und den aktiven Timer.
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    steps: Option<Arc<[Step]>>,
    current_step: usize,
    error: bool,
    timer: Option<TimerHandle>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet die Animation für die gegebenen Punkte.
    ///
    /// Bei weniger als zwei Punkten wird nur das Fehlerflag gesetzt;
    /// Snapshot und ein eventuell laufender Timer bleiben unberührt.
    /// Sonst wird ein bestehender Timer storniert, bevor der neue geplant wird.
    pub fn start(
        &mut self,
        points: &[ControlPoint],
        interval: Duration,
        scheduler: &mut impl Scheduler,
    ) -> StartOutcome {
        if points.len() < MIN_POINTS_FOR_ANIMATION {
            self.error = true;
            return StartOutcome::InsufficientPoints {
                available: points.len(),
            };
        }

        self.stop_timer(scheduler);

        let steps: Arc<[Step]> = chaikin::generate_steps(points).into();
        let step_count = steps.len();
        self.steps = Some(steps);
        self.current_step = 0;
        self.error = false;
        self.timer = Some(scheduler.schedule(interval));

        StartOutcome::Started { step_count }
    }

    /// Zurück nach Idle: Snapshot, Index und Fehler löschen, Timer stornieren.
    pub fn reset(&mut self, scheduler: &mut impl Scheduler) {
        self.stop_timer(scheduler);
        self.steps = None;
        self.current_step = 0;
        self.error = false;
    }

    /// Verarbeitet einen Tick des Timers `handle`.
    ///
    /// Ticks anderer (stornierter oder ersetzter) Timer werden verworfen.
    /// Gibt `true` zurück, wenn der Index weitergeschaltet wurde.
    pub fn tick(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            return false;
        }
        let Some(steps) = self.steps.as_ref() else {
            return false;
        };
        self.current_step = (self.current_step + 1) % steps.len();
        true
    }

    fn stop_timer(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        if self.steps.is_some() {
            AnimationPhase::Playing
        } else if self.error {
            AnimationPhase::Error
        } else {
            AnimationPhase::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.steps.is_some()
    }

    /// Fehlerflag (bleibt bis Reset oder erfolgreichem Start gesetzt).
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Anzahl Schritte im Snapshot (0 ohne Snapshot).
    pub fn step_count(&self) -> usize {
        self.steps.as_ref().map_or(0, |s| s.len())
    }

    /// Punkte des aktuell angezeigten Schritts.
    pub fn active_step(&self) -> Option<&[ControlPoint]> {
        self.steps
            .as_ref()
            .and_then(|steps| steps.get(self.current_step))
            .map(Vec::as_slice)
    }

    /// Der komplette Snapshot (Arc-Clone, O(1)).
    pub fn steps(&self) -> Option<Arc<[Step]>> {
        self.steps.clone()
    }

    pub fn active_timer(&self) -> Option<TimerHandle> {
        self.timer
    }
}
