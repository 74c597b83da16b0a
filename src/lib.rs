//! Chaikin-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState};
pub use core::{
    generate_steps, AnimationController, AnimationPhase, ControlPoint, IntervalScheduler,
    PointSet, Scheduler, StartOutcome, Step, TimerHandle, MAX_ITERATIONS,
};
pub use shared::{EditorOptions, RenderScene};
