//! Compass bearing math
//!
//! Bearings are degrees from north, increasing clockwise. Angle differences
//! are normalized into the half-circle range `(-180, 180]`.

use geo::{Bearing, Haversine, Point};

/// Great-circle initial bearing from `from` to `to`, in degrees
///
/// North is 0° and East is 90°.
#[inline]
pub fn bearing(from: Point<f64>, to: Point<f64>) -> f64 {
    Haversine.bearing(from, to)
}

/// Shortest signed rotation from bearing `a` to bearing `b`, in degrees
///
/// The result lies in `(-180, 180]`. Inputs may be any real-valued bearings;
/// they are wrapped into a full circle before differencing.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let diff = (b - a).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

/// Absolute angular difference between two bearings, in `[0, 180]`
#[inline]
pub fn angle_diff_abs(a: f64, b: f64) -> f64 {
    angle_diff(a, b).abs()
}
