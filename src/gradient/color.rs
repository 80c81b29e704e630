//! RGB color type and the fixed palette

use serde::{Deserialize, Serialize};

/// Color with each channel in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Start of the first phase, RGB(0, 128, 0)
pub const DEEP_GREEN: Rgb = Rgb::new(0.0, 0.5, 0.0);
/// End of the first phase, RGB(255, 215, 0)
pub const VIVID_YELLOW: Rgb = Rgb::new(1.0, 0.84, 0.0);
/// End of the second phase
pub const PURE_RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
/// Color at zero remaining seconds
pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
/// Sentinel shown while idle or paused, RGB(64, 224, 208)
pub const TURQUOISE: Rgb = Rgb::new(0.25, 0.88, 0.82);

impl Rgb {
    /// Create a new color from unit-range channels
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation, `t` is not clamped
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Whether every channel lies within `[0.0, 1.0]`
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to 8-bit channels, rounding to the nearest value
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Format as a `#rrggbb` string
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}
