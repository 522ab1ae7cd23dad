//! Central-endpoint approximation for ill-conditioned intersections.
//!
//! Returns whichever of the four segment endpoints is nearest to their mean.
//! Reasonable when the segments are nearly parallel and meet near an endpoint,
//! or when an endpoint lies in the interior of the other segment. The result
//! is always an input value, so it stays inside the input envelopes.

use crate::coord::{distance, Coord, Segment};

/// Endpoint of `s1`/`s2` closest to the centroid of all four endpoints.
///
/// Ties resolve to the earliest of `s1.start, s1.end, s2.start, s2.end`.
pub fn central_endpoint(s1: &Segment, s2: &Segment) -> Coord {
    let pts = [s1.start, s1.end, s2.start, s2.end];
    let mean = pts.iter().fold(Coord::zeros(), |acc, p| acc + p) / pts.len() as f64;

    let mut best = pts[0];
    let mut best_dist = distance(mean, best);
    for p in &pts[1..] {
        let d = distance(mean, *p);
        if d < best_dist {
            best_dist = d;
            best = *p;
        }
    }
    best
}
