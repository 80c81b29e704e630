//! Countdown background task
//!
//! The only place the timer engine lives. Commands arrive over an mpsc
//! queue from any thread; every resulting state is published on a watch
//! channel for render sinks.

use std::time::Duration;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::state::{Command, TickOutcome, TimerEngine, TimerEvent, TimerSnapshot};

/// Interval between ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A command marshalled onto the countdown task
#[derive(Debug)]
pub struct CommandRequest {
    pub command: Command,
    /// Receives the snapshot taken right after the command was applied
    pub reply: Option<oneshot::Sender<TimerSnapshot>>,
}

impl CommandRequest {
    /// Create a request whose result is not awaited
    pub fn fire_and_forget(command: Command) -> Self {
        Self { command, reply: None }
    }

    /// Create a request together with the receiver for its result
    pub fn with_reply(command: Command) -> (Self, oneshot::Receiver<TimerSnapshot>) {
        let (tx, rx) = oneshot::channel();
        (Self { command, reply: Some(tx) }, rx)
    }
}

/// Background task that owns the engine and its tick source
pub async fn countdown_task(
    mut engine: TimerEngine,
    mut commands: mpsc::Receiver<CommandRequest>,
    snapshots: watch::Sender<TimerSnapshot>,
) {
    info!("Starting countdown task ({}s countdown)", engine.total_seconds());

    // Present only while the engine is running
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            request = commands.recv() => {
                let Some(request) = request else {
                    info!("Command queue closed, stopping countdown task");
                    break;
                };

                match engine.apply(request.command) {
                    Some(TimerEvent::Started { remaining_seconds }) => {
                        info!("Countdown started with {}s remaining", remaining_seconds);
                        ticker = Some(tick_source());
                    }
                    Some(TimerEvent::Paused { remaining_seconds }) => {
                        info!("Countdown paused with {}s remaining", remaining_seconds);
                        ticker = None;
                    }
                    Some(TimerEvent::Restarted { was_running }) => {
                        info!("Countdown restarted (was running: {})", was_running);
                        ticker = None;
                    }
                    None => {
                        debug!("Ignoring {} command while {}", request.command, engine.phase());
                    }
                }

                let snapshot = engine.snapshot();
                publish(&snapshots, snapshot.clone());

                if let Some(reply) = request.reply {
                    if reply.send(snapshot).is_err() {
                        debug!("Requester went away before receiving the {} result", request.command);
                    }
                }
            }

            _ = next_tick(&mut ticker) => {
                let outcome = engine.advance();
                publish(&snapshots, engine.snapshot());

                if outcome == TickOutcome::Stop {
                    info!("Countdown complete, reset to {}s", engine.total_seconds());
                    ticker = None;
                }
            }
        }
    }
}

/// Build a 1 Hz tick source whose first tick fires one period from now
fn tick_source() -> Interval {
    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Wait for the next tick, or forever when no tick source is active
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn publish(snapshots: &watch::Sender<TimerSnapshot>, snapshot: TimerSnapshot) {
    debug!(
        "Render requested: {} {} current={} next={}",
        snapshot.phase,
        snapshot.label,
        snapshot.current_color.to_hex(),
        snapshot.next_color.to_hex()
    );
    if let Err(e) = snapshots.send(snapshot) {
        warn!("Failed to publish timer snapshot: {}", e);
    }
}
