//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use super::{Command, TimerEngine, TimerSnapshot};
use crate::tasks::{countdown_task, CommandRequest};

/// Capacity of the command queue feeding the countdown task
pub const COMMAND_QUEUE_CAPACITY: usize = 32;

/// Shared handle used by hotkey capture and HTTP handlers.
///
/// Holds no timer state itself: commands are queued to the countdown task
/// and state is observed through published snapshots.
#[derive(Debug)]
pub struct AppState {
    /// Queue into the countdown task
    pub command_tx: mpsc::Sender<CommandRequest>,
    /// Latest published timer snapshot
    pub snapshot_rx: watch::Receiver<TimerSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Drawable size used when a frame request gives none
    pub frame_width: f64,
    pub frame_height: f64,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState around already wired channels
    pub fn new(
        port: u16,
        host: String,
        command_tx: mpsc::Sender<CommandRequest>,
        snapshot_rx: watch::Receiver<TimerSnapshot>,
    ) -> Self {
        Self {
            command_tx,
            snapshot_rx,
            start_time: Instant::now(),
            port,
            host,
            frame_width: crate::render::frame::DEFAULT_WIDTH,
            frame_height: crate::render::frame::DEFAULT_HEIGHT,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Spawn the countdown task for `engine` and return the state wired to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch(engine: TimerEngine, port: u16, host: String) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());

        tokio::spawn(countdown_task(engine, command_rx, snapshot_tx));

        Self::new(port, host, command_tx, snapshot_rx)
    }

    /// Set the default drawable size for rendered frames
    pub fn with_frame_size(mut self, width: f64, height: f64) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    /// Queue a command and wait for the snapshot it produced
    pub async fn dispatch(&self, command: Command) -> Result<TimerSnapshot, String> {
        let (request, reply) = CommandRequest::with_reply(command);

        self.command_tx
            .send(request)
            .await
            .map_err(|e| format!("Failed to queue {} command: {}", command, e))?;

        let snapshot = reply
            .await
            .map_err(|e| format!("Countdown task dropped the {} command: {}", command, e))?;

        self.record_action(command);
        info!("Applied {} command, now {} at {}", command, snapshot.phase, snapshot.label);
        Ok(snapshot)
    }

    /// Queue a command without waiting, for callers outside the runtime
    pub fn submit(&self, command: Command) -> Result<(), String> {
        self.command_tx
            .try_send(CommandRequest::fire_and_forget(command))
            .map_err(|e| format!("Failed to queue {} command: {}", command, e))?;

        self.record_action(command);
        debug!("Queued {} command", command);
        Ok(())
    }

    /// Get the latest published timer snapshot
    pub fn get_snapshot(&self) -> TimerSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    fn record_action(&self, command: Command) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(command.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerPhase;

    fn test_state() -> AppState {
        AppState::launch(TimerEngine::default(), 0, "127.0.0.1".to_string())
    }

    #[tokio::test]
    async fn dispatch_returns_resulting_snapshot() {
        let state = test_state();
        let snapshot = state.dispatch(Command::Start).await.unwrap();
        assert_eq!(snapshot.phase, TimerPhase::Running);

        let snapshot = state.dispatch(Command::Pause).await.unwrap();
        assert_eq!(snapshot.phase, TimerPhase::Paused);
        assert_eq!(state.get_snapshot().phase, TimerPhase::Paused);
    }

    #[tokio::test]
    async fn dispatch_records_last_action() {
        let state = test_state();
        assert_eq!(state.get_last_action(), (None, None));

        state.dispatch(Command::Restart).await.unwrap();
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("restart"));
        assert!(time.is_some());
    }

    #[tokio::test]
    async fn dispatch_fails_once_countdown_is_gone() {
        let (command_tx, command_rx) = mpsc::channel(1);
        let (_snapshot_tx, snapshot_rx) = watch::channel(TimerEngine::default().snapshot());
        drop(command_rx);

        let state = AppState::new(0, "127.0.0.1".to_string(), command_tx, snapshot_rx);
        assert!(state.dispatch(Command::Start).await.is_err());
        assert!(state.submit(Command::Start).is_err());
    }

    #[test]
    fn uptime_formats_seconds() {
        let (command_tx, _command_rx) = mpsc::channel(1);
        let (_snapshot_tx, snapshot_rx) = watch::channel(TimerEngine::default().snapshot());
        let state = AppState::new(0, "127.0.0.1".to_string(), command_tx, snapshot_rx);
        assert!(state.get_uptime().ends_with('s'));
    }
}
