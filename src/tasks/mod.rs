//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod countdown;
pub mod label_display;

// Re-export main functions
pub use countdown::{countdown_task, CommandRequest};
pub use label_display::label_display_task;
