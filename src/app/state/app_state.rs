use crate::app::CommandLog;
use crate::core::{AnimationController, ControlPoint, IntervalScheduler, PointSet, Step};
use crate::shared::EditorOptions;

use super::SelectionState;

/// Hauptzustand der Anwendung
///
/// Wird ausschließlich über `AppController` mutiert; alle Callbacks
/// (Zeiger, Tasten, Ticks) laufen nacheinander auf dem UI-Thread.
pub struct AppState {
    /// Kontrollpunkte in Einfügereihenfolge
    pub points: PointSet,
    /// Drag-Selektion
    pub selection: SelectionState,
    /// Schritt-Animation (Snapshot, Index, Fehler, Timer)
    pub animation: AnimationController,
    /// Periodische Timer der Animation
    pub scheduler: IntervalScheduler,
    /// Laufzeit-Optionen (Farben, Größen, Intervall)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            points: PointSet::new(),
            selection: SelectionState::new(),
            animation: AnimationController::new(),
            scheduler: IntervalScheduler::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Kopie der aktuellen Kontrollpunkte.
    pub fn control_points(&self) -> Vec<ControlPoint> {
        self.points.as_slice().to_vec()
    }

    /// Kopie des Schritt-Snapshots (leer ohne laufende Animation).
    pub fn algorithm_steps(&self) -> Vec<Step> {
        self.animation
            .steps()
            .map(|steps| steps.to_vec())
            .unwrap_or_default()
    }

    /// Index des angezeigten Schritts.
    pub fn current_step(&self) -> usize {
        self.animation.current_step()
    }

    /// Ob gerade abgespielt wird.
    pub fn is_animating(&self) -> bool {
        self.animation.is_playing()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
