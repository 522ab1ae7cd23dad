//! Point/segment/line-string distances.
//!
//! Purpose
//! - Euclidean distances between the primitives of `coord`. These are plain
//!   floating-point formulas; only the intersection short-circuit in
//!   `segment_segment_distance` touches topology.
//!
//! Conventions
//! - Zero-length segments are treated as points, never as errors.
//! - Projection parameter `r` of `p` onto `a→b`: `r <= 0` clamps to `a`,
//!   `r >= 1` clamps to `b`, otherwise the perpendicular distance is used.

use crate::coord::{segments_overlap, Coord, Segment};
use crate::error::{GeomError, Result};

pub use crate::coord::distance;

#[inline]
fn squared_length(seg: &Segment) -> f64 {
    let d = seg.end - seg.start;
    d.x * d.x + d.y * d.y
}

/// Signed perpendicular offset of `p` from the line through `seg`, scaled by `1/|seg|²`.
#[inline]
fn perpendicular_factor(p: Coord, seg: &Segment, len2: f64) -> f64 {
    let (a, b) = (seg.start, seg.end);
    ((a.y - p.y) * (b.x - a.x) - (a.x - p.x) * (b.y - a.y)) / len2
}

/// Distance from `p` to the closed segment `seg`.
pub fn point_segment_distance(p: Coord, seg: &Segment) -> f64 {
    if seg.is_degenerate() {
        return distance(p, seg.start);
    }
    let (a, b) = (seg.start, seg.end);
    let len2 = squared_length(seg);
    let r = ((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / len2;
    if r <= 0.0 {
        return distance(p, a);
    }
    if r >= 1.0 {
        return distance(p, b);
    }
    perpendicular_factor(p, seg, len2).abs() * len2.sqrt()
}

/// Distance from `p` to the infinite line through `seg`.
///
/// A degenerate `seg` defines no line; the result is NaN.
pub fn perpendicular_distance(p: Coord, seg: &Segment) -> f64 {
    let len2 = squared_length(seg);
    perpendicular_factor(p, seg, len2).abs() * len2.sqrt()
}

/// Distance from `p` to the polyline through `line`.
///
/// A single vertex is a valid line (distance to that vertex). Fails on an
/// empty slice.
pub fn point_line_string_distance(p: Coord, line: &[Coord]) -> Result<f64> {
    let Some(first) = line.first() else {
        return Err(GeomError::invalid(
            "line must contain at least one vertex to measure a distance",
        ));
    };
    let min = line
        .windows(2)
        .map(|w| point_segment_distance(p, &Segment::new(w[0], w[1])))
        .fold(distance(p, *first), f64::min);
    Ok(min)
}

/// Minimum distance between two closed segments.
///
/// Zero when they intersect; otherwise the smallest of the four
/// endpoint-to-segment distances.
pub fn segment_segment_distance(s1: &Segment, s2: &Segment) -> f64 {
    if s1.is_degenerate() {
        return point_segment_distance(s1.start, s2);
    }
    if s2.is_degenerate() {
        return point_segment_distance(s2.end, s1);
    }
    if segments_overlap(s1, s2) && parametric_crossing(s1, s2) {
        return 0.0;
    }
    [
        point_segment_distance(s1.start, s2),
        point_segment_distance(s1.end, s2),
        point_segment_distance(s2.start, s1),
        point_segment_distance(s2.end, s1),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min)
}

/// Parameters `r` (along `s1`) and `s` (along `s2`) of the line crossing both in `[0, 1]`.
///
/// Parallel lines report no crossing; collinear overlaps are caught by the
/// endpoint distances instead.
fn parametric_crossing(s1: &Segment, s2: &Segment) -> bool {
    let (a, b) = (s1.start, s1.end);
    let (c, d) = (s2.start, s2.end);
    let denom = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    if denom == 0.0 {
        return false;
    }
    let r = ((a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y)) / denom;
    let s = ((a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y)) / denom;
    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s)
}

/// Index of the vertex of `line` nearest to `p`; `None` for an empty line.
///
/// Ties resolve to the last nearest vertex.
pub fn nearest_vertex_index(line: &[Coord], p: Coord) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in line.iter().enumerate() {
        let d = distance(*v, p);
        match best {
            Some((_, min)) if d > min => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
