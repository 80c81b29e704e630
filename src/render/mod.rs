//! Render contract
//!
//! Turns a timer snapshot into painter-agnostic geometry: a full-area fill,
//! an optional right-anchored sweep, and the `MM:SS` label.

pub mod frame;

// Re-export main types
pub use frame::{format_label, render_frame, sweep_width, Frame, PaintRect};
