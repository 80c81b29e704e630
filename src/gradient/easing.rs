//! Easing curves
//!
//! Both curves expect `t` in `[0, 1]` and do not clamp it.

/// Cubic ease-in-out, used for color phase progress
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Quadratic ease-out, used for the width of the transition sweep
pub fn ease_out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}
