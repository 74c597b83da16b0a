//! Periodische Timer hinter einer austauschbaren Scheduler-Schnittstelle.
//!
//! Der `IntervalScheduler` läuft gegen eine explizite Uhr: der Host schiebt
//! die vergangene Zeit hinein (Wall-Clock im Binary, Fake-Clock in Tests)
//! und bekommt die fälligen Timer-Handles zurück. Es gibt keine Threads und
//! keine blockierenden Waits.

use std::time::Duration;

/// Opaque Kennung eines geplanten Timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Roh-ID (nur für Logging).
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Plant wiederkehrende Ticks.
pub trait Scheduler {
    /// Plant einen periodischen Timer mit festem Intervall.
    fn schedule(&mut self, interval: Duration) -> TimerHandle;

    /// Storniert einen Timer. Idempotent, unbekannte Handles werden ignoriert.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct PeriodicTimer {
    handle: TimerHandle,
    interval: Duration,
    next_due: Duration,
}

/// Deterministischer Intervall-Scheduler mit externer Uhr.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<PeriodicTimer>,
}

impl IntervalScheduler {
    /// Erstellt einen Scheduler mit Uhrzeit 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Scheduler-Zeit.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Anzahl aktiver Timer.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Verschiebt die Uhr um `delta` und liefert alle fälligen Ticks.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<TimerHandle> {
        self.advance_to(self.now + delta)
    }

    /// Setzt die Uhr auf `elapsed` und liefert alle fälligen Ticks in
    /// Fälligkeitsreihenfolge.
    ///
    /// Überspringt die Uhr mehrere Intervalle, feuert ein Timer einmal pro
    /// vergangenem Intervall. Rückwärtslaufende Zeit wird ignoriert.
    pub fn advance_to(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        if elapsed <= self.now {
            return Vec::new();
        }
        self.now = elapsed;

        let mut fired: Vec<(Duration, TimerHandle)> = Vec::new();
        for timer in &mut self.timers {
            while timer.next_due <= elapsed {
                fired.push((timer.next_due, timer.handle));
                timer.next_due += timer.interval;
            }
        }
        fired.sort();
        fired.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Zeit bis zum nächsten fälligen Tick (für verzögertes Repaint).
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.next_due.saturating_sub(self.now))
            .min()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, interval: Duration) -> TimerHandle {
        // Null-Intervall würde advance_to endlos feuern lassen
        let interval = interval.max(Duration::from_millis(1));
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push(PeriodicTimer {
            handle,
            interval,
            next_due: self.now + interval,
        });
        log::debug!("Timer {} geplant ({:?})", handle.id(), interval);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        if self.timers.len() != before {
            log::debug!("Timer {} storniert", handle.id());
        }
    }
}
