//! Timer state structure and snapshots

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    gradient::{
        color::{DEEP_GREEN, TURQUOISE},
        Rgb,
    },
    render::format_label,
};

/// Default countdown length: 30 minutes
pub const DEFAULT_TOTAL_SECONDS: u32 = 30 * 60;

/// Lifecycle phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    /// Never started, or the last run completed
    Idle,
    Running,
    Paused,
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerPhase::Idle => write!(f, "idle"),
            TimerPhase::Running => write!(f, "running"),
            TimerPhase::Paused => write!(f, "paused"),
        }
    }
}

/// Countdown state, owned and mutated only by the timer engine
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    pub phase: TimerPhase,
    /// Color currently filling the display
    pub current_color: Rgb,
    /// Color the sweep is moving toward during the active second
    pub next_color: Rgb,
}

impl TimerState {
    /// Create a fresh idle state for the given duration
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            phase: TimerPhase::Idle,
            current_color: TURQUOISE,
            next_color: DEEP_GREEN,
        }
    }

    /// Check if ticks currently advance the clock
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Reset remaining time and colors to their initial values
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.current_color = TURQUOISE;
        self.next_color = DEEP_GREEN;
    }

    /// Copy the state into an immutable snapshot for rendering
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            running: self.is_running(),
            total_seconds: self.total_seconds,
            remaining_seconds: self.remaining_seconds,
            current_color: self.current_color,
            next_color: self.next_color,
            label: format_label(self.remaining_seconds),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_SECONDS)
    }
}

/// Point-in-time copy of the timer state, read by render sinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: TimerPhase,
    pub running: bool,
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    pub current_color: Rgb,
    pub next_color: Rgb,
    /// Remaining time as `MM:SS`
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_with_sentinel_colors() {
        let state = TimerState::default();
        assert_eq!(state.total_seconds, 1800);
        assert_eq!(state.remaining_seconds, 1800);
        assert!(!state.is_running());
        assert_eq!(state.current_color, TURQUOISE);
        assert_eq!(state.next_color, DEEP_GREEN);
    }

    #[test]
    fn snapshot_carries_label() {
        let mut state = TimerState::new(1800);
        state.remaining_seconds = 754;
        let snapshot = state.snapshot();
        assert_eq!(snapshot.label, "12:34");
        assert_eq!(snapshot.phase, TimerPhase::Idle);
        assert!(!snapshot.running);
    }

    #[test]
    fn phase_serializes_lowercase() {
        let json = serde_json::to_string(&TimerPhase::Running).unwrap();
        assert_eq!(json, "\"running\"");
        assert_eq!(TimerPhase::Paused.to_string(), "paused");
    }
}
