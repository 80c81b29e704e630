//! Countdown engine
//!
//! The engine is a tick-driven state machine. It never reads the wall
//! clock; whoever owns it delivers one `advance()` per second while it is
//! running and drops its tick source when told to stop.
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ... -> Idle (completed)
//!            any --restart--> Paused (reset)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::timer_state::{TimerPhase, TimerSnapshot, TimerState};
use crate::gradient::{color::TURQUOISE, color_for_remaining};

/// Commands accepted from hotkeys and the control API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Start,
    Pause,
    Restart,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Start => write!(f, "start"),
            Command::Pause => write!(f, "pause"),
            Command::Restart => write!(f, "restart"),
        }
    }
}

/// Transition produced by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Entered `Running`; the tick source must be activated
    Started { remaining_seconds: u32 },
    /// Left `Running`; the tick source must be deactivated
    Paused { remaining_seconds: u32 },
    /// Time and colors reset; `was_running` tells whether ticks were active
    Restarted { was_running: bool },
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep delivering ticks
    Continue,
    /// The run completed; the tick source must be deactivated
    Stop,
}

/// Owner of the countdown state
#[derive(Debug, Clone)]
pub struct TimerEngine {
    state: TimerState,
}

impl TimerEngine {
    /// Create an idle engine for a countdown of `total_seconds`.
    ///
    /// # Panics
    ///
    /// Panics if `total_seconds` is zero.
    pub fn new(total_seconds: u32) -> Self {
        assert!(total_seconds > 0, "countdown length must be positive");
        Self {
            state: TimerState::new(total_seconds),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> TimerPhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn total_seconds(&self) -> u32 {
        self.state.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.state.snapshot()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Dispatch a command to its handler
    pub fn apply(&mut self, command: Command) -> Option<TimerEvent> {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Restart => self.restart(),
        }
    }

    pub fn start(&mut self) -> Option<TimerEvent> {
        match self.state.phase {
            TimerPhase::Idle | TimerPhase::Paused => {
                self.state.phase = TimerPhase::Running;
                Some(TimerEvent::Started {
                    remaining_seconds: self.state.remaining_seconds,
                })
            }
            TimerPhase::Running => None,
        }
    }

    /// Freeze the countdown and show the gradient position against the
    /// sentinel color.
    pub fn pause(&mut self) -> Option<TimerEvent> {
        if !self.state.is_running() {
            return None;
        }
        self.state.phase = TimerPhase::Paused;
        self.state.current_color = TURQUOISE;
        self.state.next_color = color_for_remaining(self.state.remaining_seconds);
        Some(TimerEvent::Paused {
            remaining_seconds: self.state.remaining_seconds,
        })
    }

    /// Reset to the full duration and hold there. Colors always land on the
    /// sentinel and deep green, whatever the duration.
    pub fn restart(&mut self) -> Option<TimerEvent> {
        let was_running = self.state.is_running();
        self.state.reset();
        self.state.phase = TimerPhase::Paused;
        Some(TimerEvent::Restarted { was_running })
    }

    /// Advance the countdown by one second.
    ///
    /// Colors are buffered one tick ahead: the previous `next_color` becomes
    /// current and the new `next_color` is taken one second further on.
    ///
    /// # Panics
    ///
    /// Panics if the engine is not running.
    pub fn advance(&mut self) -> TickOutcome {
        assert!(
            self.state.is_running(),
            "tick delivered while the countdown is {}",
            self.state.phase
        );

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds == 0 {
            self.complete();
            return TickOutcome::Stop;
        }

        self.state.current_color = self.state.next_color;
        self.state.next_color = color_for_remaining(self.state.remaining_seconds - 1);
        TickOutcome::Continue
    }

    fn complete(&mut self) {
        self.state.phase = TimerPhase::Idle;
        self.state.reset();
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(super::timer_state::DEFAULT_TOTAL_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::color::{BLACK, DEEP_GREEN, PURE_RED};

    #[test]
    fn start_pause_start() {
        let mut engine = TimerEngine::default();
        assert_eq!(engine.phase(), TimerPhase::Idle);

        assert!(engine.start().is_some());
        assert_eq!(engine.phase(), TimerPhase::Running);

        assert!(engine.pause().is_some());
        assert_eq!(engine.phase(), TimerPhase::Paused);

        assert!(engine.start().is_some());
        assert!(engine.is_running());
    }

    #[test]
    fn start_is_noop_while_running() {
        let mut engine = TimerEngine::new(60);
        engine.start();
        engine.advance();
        let before = engine.state().clone();
        assert_eq!(engine.start(), None);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn pause_is_noop_when_idle() {
        let mut engine = TimerEngine::default();
        assert_eq!(engine.pause(), None);
        assert_eq!(engine.state(), &TimerState::default());
    }

    #[test]
    fn pause_is_idempotent() {
        let mut engine = TimerEngine::default();
        engine.start();
        for _ in 0..5 {
            engine.advance();
        }
        engine.pause();
        let once = engine.state().clone();
        assert_eq!(engine.pause(), None);
        assert_eq!(engine.state(), &once);
    }

    #[test]
    fn pause_snapshots_gradient_without_lookahead() {
        let mut engine = TimerEngine::new(1800);
        engine.start();
        for _ in 0..10 {
            engine.advance();
        }
        assert_eq!(
            engine.pause(),
            Some(TimerEvent::Paused {
                remaining_seconds: 1790
            })
        );
        assert_eq!(engine.state().current_color, TURQUOISE);
        assert_eq!(engine.state().next_color, color_for_remaining(1790));
    }

    #[test]
    fn restart_is_idempotent() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.advance();
        engine.restart();
        let once = engine.state().clone();
        engine.restart();
        assert_eq!(engine.state(), &once);
    }

    #[test]
    fn start_then_restart_resets() {
        let mut engine = TimerEngine::default();
        engine.start();
        assert_eq!(
            engine.restart(),
            Some(TimerEvent::Restarted { was_running: true })
        );
        assert_eq!(engine.remaining_seconds(), engine.total_seconds());
        assert!(!engine.is_running());
        assert_eq!(engine.phase(), TimerPhase::Paused);
        assert_eq!(engine.state().current_color, TURQUOISE);
        assert_eq!(engine.state().next_color, DEEP_GREEN);
    }

    #[test]
    fn restart_is_idempotent_for_short_countdowns() {
        let mut engine = TimerEngine::new(60);
        engine.start();
        engine.advance();
        engine.restart();
        let once = engine.state().clone();
        engine.restart();
        assert_eq!(engine.state(), &once);
        assert_eq!(once.next_color, DEEP_GREEN);
    }

    #[test]
    fn restart_from_idle_reports_inactive_ticks() {
        let mut engine = TimerEngine::default();
        assert_eq!(
            engine.restart(),
            Some(TimerEvent::Restarted { was_running: false })
        );
    }

    #[test]
    fn advance_buffers_colors_one_tick_ahead() {
        let mut engine = TimerEngine::new(1800);
        engine.start();

        assert_eq!(engine.advance(), TickOutcome::Continue);
        assert_eq!(engine.remaining_seconds(), 1799);
        assert_eq!(engine.state().current_color, DEEP_GREEN);
        assert_eq!(engine.state().next_color, color_for_remaining(1798));

        let expected_current = engine.state().next_color;
        engine.advance();
        assert_eq!(engine.state().current_color, expected_current);
        assert_eq!(engine.state().next_color, color_for_remaining(1797));
    }

    #[test]
    fn final_seconds_approach_black() {
        let mut engine = TimerEngine::new(3);
        engine.start();
        engine.advance();
        assert_eq!(engine.remaining_seconds(), 2);
        engine.advance();
        assert_eq!(engine.remaining_seconds(), 1);
        assert_eq!(engine.state().next_color, BLACK);
        assert_ne!(engine.state().current_color, PURE_RED);
    }

    #[test]
    fn full_run_auto_resets() {
        let mut engine = TimerEngine::new(10);
        engine.start();

        for _ in 0..9 {
            assert_eq!(engine.advance(), TickOutcome::Continue);
        }
        assert_eq!(engine.advance(), TickOutcome::Stop);

        assert!(!engine.is_running());
        assert_eq!(engine.phase(), TimerPhase::Idle);
        assert_eq!(engine.remaining_seconds(), 10);
        assert_eq!(engine.state().current_color, TURQUOISE);
        assert_eq!(engine.state().next_color, DEEP_GREEN);
    }

    #[test]
    fn completed_run_can_start_again() {
        let mut engine = TimerEngine::new(2);
        engine.start();
        engine.advance();
        engine.advance();
        assert!(engine.start().is_some());
        assert_eq!(engine.advance(), TickOutcome::Continue);
        assert_eq!(engine.remaining_seconds(), 1);
    }

    #[test]
    fn remaining_never_exceeds_total() {
        let mut engine = TimerEngine::new(120);
        engine.start();
        for _ in 0..500 {
            if engine.advance() == TickOutcome::Stop {
                engine.start();
            }
            assert!(engine.remaining_seconds() <= engine.total_seconds());
            assert!(engine.state().current_color.is_normalized());
            assert!(engine.state().next_color.is_normalized());
        }
    }

    #[test]
    #[should_panic(expected = "tick delivered")]
    fn advance_while_idle_panics() {
        let mut engine = TimerEngine::default();
        engine.advance();
    }

    #[test]
    #[should_panic(expected = "tick delivered")]
    fn advance_while_paused_panics() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.pause();
        engine.advance();
    }

    #[test]
    #[should_panic(expected = "countdown length must be positive")]
    fn zero_length_countdown_panics() {
        TimerEngine::new(0);
    }

    #[test]
    fn apply_routes_commands() {
        let mut engine = TimerEngine::default();
        assert!(matches!(
            engine.apply(Command::Start),
            Some(TimerEvent::Started { .. })
        ));
        assert!(matches!(
            engine.apply(Command::Pause),
            Some(TimerEvent::Paused { .. })
        ));
        assert!(matches!(
            engine.apply(Command::Restart),
            Some(TimerEvent::Restarted { .. })
        ));
    }
}
