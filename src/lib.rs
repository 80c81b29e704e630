//! Focus Timer - A countdown overlay driven by a color gradient
//!
//! This library provides the countdown engine, the remaining-time color
//! gradient, the frame render contract, and the control surfaces (hotkey
//! signals and an HTTP API) that feed commands to the engine.

pub mod config;
pub mod gradient;
pub mod state;
pub mod render;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use gradient::{color_for_remaining, Rgb};
pub use state::{AppState, Command, TimerEngine};
pub use render::{render_frame, Frame};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
