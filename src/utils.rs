//! Pixel coordinate helpers.

use opencv::core::Point;

/// Convert an f64 pixel coordinate to i32, clamping to `[min, max]`.
/// Non-finite values map to `min`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // value is clamped into i32 range first
pub fn f64_to_i32_clamp(value: f64, min: i32, max: i32) -> i32 {
    if !value.is_finite() {
        return min;
    }
    value.round().clamp(f64::from(min), f64::from(max)) as i32
}

/// Landmark coordinates to a drawable point
#[must_use]
pub fn to_point(x: f64, y: f64) -> Point {
    // keep far-off landmarks drawable without overflowing OpenCV's fixed-point math
    const LIMIT: i32 = 1 << 15;
    Point::new(f64_to_i32_clamp(x, -LIMIT, LIMIT), f64_to_i32_clamp(y, -LIMIT, LIMIT))
}
