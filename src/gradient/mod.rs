//! Color gradient module
//!
//! This module maps remaining countdown time to display colors.

pub mod color;
pub mod easing;
pub mod mapper;

// Re-export main types
pub use color::Rgb;
pub use easing::{ease_in_out_cubic, ease_out_quad};
pub use mapper::color_for_remaining;
