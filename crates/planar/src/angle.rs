//! Angle utilities (radians).
//!
//! Conventions
//! - Angles are measured from the positive X axis, counter-clockwise positive.
//! - `normalize` maps into `(-π, π]`, `normalize_positive` into `[0, 2π)`.
//! - Unlike the predicates in `orientation`, these are plain floating-point
//!   trigonometry with no robustness guarantees near degenerate input.

use std::f64::consts::{PI, TAU};

use crate::coord::Coord;
use crate::orientation::Orientation;

/// Angle of the vector `p0 → p1`, in `(-π, π]`.
#[inline]
pub fn angle(p0: Coord, p1: Coord) -> f64 {
    (p1.y - p0.y).atan2(p1.x - p0.x)
}

/// Angle of the vector from the origin to `p`.
#[inline]
pub fn angle_from_origin(p: Coord) -> f64 {
    p.y.atan2(p.x)
}

#[inline]
fn dot_at(endpoint1: Coord, base: Coord, endpoint2: Coord) -> f64 {
    (endpoint1 - base).dot(&(endpoint2 - base))
}

/// `true` if the angle `endpoint1 - base - endpoint2` is strictly less than π/2.
pub fn is_acute(endpoint1: Coord, base: Coord, endpoint2: Coord) -> bool {
    dot_at(endpoint1, base, endpoint2) > 0.0
}

/// `true` if the angle `endpoint1 - base - endpoint2` is strictly greater than π/2.
pub fn is_obtuse(endpoint1: Coord, base: Coord, endpoint2: Coord) -> bool {
    dot_at(endpoint1, base, endpoint2) < 0.0
}

/// Unsigned angle between `tail → tip1` and `tail → tip2`, in `[0, π]`.
pub fn angle_between(tip1: Coord, tail: Coord, tip2: Coord) -> f64 {
    diff(angle(tail, tip1), angle(tail, tip2))
}

/// Signed angle from `tail → tip1` to `tail → tip2`, in `(-π, π]`; positive is CCW.
pub fn angle_between_oriented(tip1: Coord, tail: Coord, tip2: Coord) -> f64 {
    normalize(angle(tail, tip2) - angle(tail, tip1))
}

/// Interior angle at `p1` of the path `p0 → p1 → p2`, in `[0, 2π)`.
///
/// Only meaningful when the path belongs to a CW ring; no orientation check is made.
pub fn interior_angle(p0: Coord, p1: Coord, p2: Coord) -> f64 {
    (angle(p1, p2) - angle(p1, p0)).abs()
}

/// Turn direction from heading `ang1` to heading `ang2`.
pub fn angle_orientation(ang1: f64, ang2: f64) -> Orientation {
    Orientation::from_sign((ang2 - ang1).sin())
}

/// Angle mapped into `(-π, π]`. NaN for non-finite input.
pub fn normalize(angle: f64) -> f64 {
    if !angle.is_finite() {
        return f64::NAN;
    }
    if angle > -PI && angle <= PI {
        return angle;
    }
    let mut r = angle.rem_euclid(TAU);
    if r > PI {
        r -= TAU;
    }
    if r <= -PI {
        r += TAU;
    }
    r
}

/// Angle mapped into `[0, 2π)`. NaN for non-finite input.
pub fn normalize_positive(angle: f64) -> f64 {
    if !angle.is_finite() {
        return f64::NAN;
    }
    let r = angle.rem_euclid(TAU);
    // A tiny negative remainder plus TAU can round up to TAU itself.
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Smallest difference between two angles, in `[0, π]`.
pub fn diff(ang1: f64, ang2: f64) -> f64 {
    let d = if ang1 < ang2 { ang2 - ang1 } else { ang1 - ang2 };
    if d > PI {
        TAU - d
    } else {
        d
    }
}
