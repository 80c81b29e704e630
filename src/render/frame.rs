//! Frame geometry

use serde::{Deserialize, Serialize};

use crate::{
    gradient::{ease_out_quad, Rgb},
    state::TimerSnapshot,
};

/// Default drawable width of the overlay strip
pub const DEFAULT_WIDTH: f64 = 100.0;
/// Default drawable height of the overlay strip
pub const DEFAULT_HEIGHT: f64 = 1400.0;

/// Axis-aligned rectangle filled with a single color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

/// Everything a painter needs for one paint call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Full-area fill with the current color
    pub fill: PaintRect,
    /// Overlay of the next color, only while running
    pub sweep: Option<PaintRect>,
    pub label: String,
}

/// Format remaining seconds as zero-padded `MM:SS`
pub fn format_label(remaining_seconds: u32) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

/// Width of the sweep overlay for a drawable of `width`.
///
/// Full width when the remaining time is a whole number of minutes, nearly
/// empty one second later, then widening again over the rest of the minute.
pub fn sweep_width(width: f64, remaining_seconds: u32) -> f64 {
    let progress = (remaining_seconds % 60) as f64 / 60.0;
    width * (1.0 - ease_out_quad(progress))
}

/// Render one frame from a snapshot
pub fn render_frame(snapshot: &TimerSnapshot, width: f64, height: f64) -> Frame {
    let fill = PaintRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        color: snapshot.current_color,
    };

    let sweep = snapshot.running.then(|| {
        let sweep = sweep_width(width, snapshot.remaining_seconds);
        PaintRect {
            x: width - sweep,
            y: 0.0,
            width: sweep,
            height,
            color: snapshot.next_color,
        }
    });

    Frame {
        width,
        height,
        fill,
        sweep,
        label: format_label(snapshot.remaining_seconds),
    }
}
