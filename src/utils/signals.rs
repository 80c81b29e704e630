//! Signal handling for hotkeys and graceful shutdown
//!
//! Signals reach the process regardless of which window has input focus,
//! so they serve as the global hotkeys. Bind them in the desktop
//! environment, e.g. `pkill -USR1 focus-timer` on Ctrl+Alt+S.

use std::sync::Arc;

use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM, SIGUSR1, SIGUSR2};
use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{error, info, warn};

use crate::state::{AppState, Command};

/// Signals captured as hotkeys
pub const HOTKEY_SIGNALS: [i32; 3] = [SIGUSR1, SIGUSR2, SIGHUP];

/// Map a captured signal to the command it stands for
pub fn command_for_signal(signal: i32) -> Option<Command> {
    match signal {
        SIGUSR1 => Some(Command::Start),
        SIGUSR2 => Some(Command::Pause),
        SIGHUP => Some(Command::Restart),
        _ => None,
    }
}

/// Forward hotkey signals onto the countdown command queue
pub async fn hotkey_signal_task(state: Arc<AppState>) {
    let mut signals = match Signals::new(HOTKEY_SIGNALS) {
        Ok(signals) => signals,
        Err(e) => {
            error!("Failed to register hotkey signals, hotkeys disabled: {}", e);
            return;
        }
    };

    info!("Hotkeys ready: SIGUSR1=start, SIGUSR2=pause, SIGHUP=restart");

    while let Some(signal) = signals.next().await {
        let Some(command) = command_for_signal(signal) else {
            warn!("Ignoring unexpected signal: {}", signal);
            continue;
        };

        info!("Hotkey signal {} received, dispatching {}", signal, command);
        if let Err(e) = state.dispatch(command).await {
            error!("Failed to dispatch hotkey command: {}", e);
        }
    }
}

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([SIGTERM, SIGINT]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to create signal handler, falling back to Ctrl+C: {}", e);
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
            return;
        }
    };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}
