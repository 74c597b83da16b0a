//! Core-Domänentypen: Kontrollpunkte, Chaikin-Unterteilung, Scheduler, Animation.

pub mod animation;
/// Chaikin-Eckenschneiden als reine Funktion
pub mod chaikin;
pub mod point_set;
pub mod scheduler;

/// Kontrollpunkt mit ganzzahligen Canvas-Koordinaten.
pub type ControlPoint = glam::IVec2;

pub use animation::{AnimationController, AnimationPhase, StartOutcome, MIN_POINTS_FOR_ANIMATION};
pub use chaikin::{generate_steps, Step, MAX_ITERATIONS, Q_RATIO, R_RATIO};
pub use point_set::PointSet;
pub use scheduler::{IntervalScheduler, Scheduler, TimerHandle};
