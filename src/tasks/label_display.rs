//! Label display background task

use tokio::sync::watch;
use tracing::info;

use crate::state::TimerSnapshot;

/// Tracks the last shown label so it is only redrawn when time changes
#[derive(Debug, Default)]
pub struct LabelDisplay {
    shown_seconds: Option<u32>,
}

impl LabelDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the label to show if the remaining time changed
    pub fn update(&mut self, snapshot: &TimerSnapshot) -> Option<String> {
        if self.shown_seconds == Some(snapshot.remaining_seconds) {
            return None;
        }
        self.shown_seconds = Some(snapshot.remaining_seconds);
        Some(snapshot.label.clone())
    }
}

/// Background task that shows the `MM:SS` label whenever it changes
pub async fn label_display_task(mut snapshots: watch::Receiver<TimerSnapshot>) {
    let mut display = LabelDisplay::new();

    let initial = snapshots.borrow_and_update().clone();
    if let Some(label) = display.update(&initial) {
        info!(target: "focus_timer::label", "{}", label);
    }

    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        if let Some(label) = display.update(&snapshot) {
            info!(target: "focus_timer::label", "{} ({})", label, snapshot.phase);
        }
    }

    info!("Snapshot channel closed, stopping label display");
}
