//! Focus Timer - A countdown overlay driven by a color gradient
//!
//! This is the main entry point for the focus-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use focus_timer::{
    api::create_router,
    config::Config,
    state::{AppState, TimerEngine, DEFAULT_TOTAL_SECONDS},
    tasks::label_display_task,
    utils::{hotkey_signal_task, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, frame={}x{}",
          config.host, config.port, config.width, config.height);

    // Spawn the countdown task that owns the engine
    let state = Arc::new(
        AppState::launch(TimerEngine::new(DEFAULT_TOTAL_SECONDS), config.port, config.host.clone())
            .with_frame_size(config.width, config.height),
    );

    // Show the label whenever the remaining time changes
    tokio::spawn(label_display_task(state.snapshot_rx.clone()));

    // Forward hotkey signals onto the command queue
    tokio::spawn(hotkey_signal_task(Arc::clone(&state)));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start   - Start or resume the countdown");
    info!("  POST /pause   - Pause the countdown");
    info!("  POST /restart - Reset the countdown");
    info!("  GET  /status  - Current timer snapshot");
    info!("  GET  /frame   - Rendered frame (?width=&height=)");
    info!("  GET  /health  - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
