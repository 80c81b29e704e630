//! State management module
//!
//! This module contains the countdown state, the engine that mutates it,
//! and the shared application handle.

pub mod app_state;
pub mod engine;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use engine::{Command, TickOutcome, TimerEngine, TimerEvent};
pub use timer_state::{TimerPhase, TimerSnapshot, TimerState, DEFAULT_TOTAL_SECONDS};
