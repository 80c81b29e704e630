//! Remaining time to color mapping
//!
//! The countdown is split into three phases:
//!
//! ```text
//! > 15 min    deep green  -> vivid yellow   (cubic ease-in-out)
//! 5..=15 min  vivid yellow -> pure red      (cubic ease-in-out)
//! <= 5 min    pure red    -> black          (linear)
//! ```

use super::{
    color::{Rgb, BLACK, DEEP_GREEN, PURE_RED, VIVID_YELLOW},
    easing::ease_in_out_cubic,
};

/// Lower bound of the green to yellow phase, in seconds
pub const FIFTEEN_MINUTES: u32 = 15 * 60;
/// Lower bound of the yellow to red phase, in seconds
pub const FIVE_MINUTES: u32 = 5 * 60;

/// Map a remaining-seconds value to its gradient color.
///
/// Values are expected in `[0, 2 * FIFTEEN_MINUTES]`; phase boundaries are
/// exclusive, so exactly 900 and 300 belong to the following phase.
pub fn color_for_remaining(remaining_seconds: u32) -> Rgb {
    let remaining = remaining_seconds as f64;
    let r15 = FIFTEEN_MINUTES as f64;
    let r5 = FIVE_MINUTES as f64;

    if remaining_seconds > FIFTEEN_MINUTES {
        let t = 1.0 - (remaining - r15) / r15;
        DEEP_GREEN.lerp(VIVID_YELLOW, ease_in_out_cubic(t))
    } else if remaining_seconds > FIVE_MINUTES {
        let t = 1.0 - (remaining - r5) / (r15 - r5);
        VIVID_YELLOW.lerp(PURE_RED, ease_in_out_cubic(t))
    } else {
        let t = 1.0 - remaining / r5;
        PURE_RED.lerp(BLACK, t)
    }
}
