//! Robust segment/segment and point/segment intersection.
//!
//! Decision ladder for two segments, cheapest first:
//! 1. disjoint envelopes → no intersection;
//! 2. robust orientation of each endpoint against the other segment; both
//!    endpoints strictly on one side → no intersection;
//! 3. all four collinear → overlap resolved by envelope containment;
//! 4. some endpoint collinear → that endpoint is the intersection, copied as is;
//! 5. otherwise a proper crossing: homogeneous solve on inputs translated to
//!    the centre of the envelope overlap, validated against both envelopes,
//!    with the central endpoint as last resort.
//!
//! No state survives a call.

use crate::coord::{point_within_segment_bounds, xy_equal, Coord, Segment};
use crate::error::{GeomError, Result};
use crate::orientation::{orientation, Orientation};

use super::central::central_endpoint;
use super::hcoords;
use super::types::{Classified, Intersection, Method};

/// Intersection of two segments.
#[inline]
pub fn intersect(s1: &Segment, s2: &Segment) -> Intersection {
    classify(s1, s2).result
}

/// Intersection of two segments together with the tier that decided it.
pub fn classify(s1: &Segment, s2: &Segment) -> Classified {
    let env1 = s1.envelope();
    let env2 = s2.envelope();
    let Some(overlap) = env1.intersection(&env2) else {
        return Classified::improper(Intersection::None, Method::EnvelopeReject);
    };

    let s2_start_vs_s1 = orientation(s1.start, s1.end, s2.start);
    let s2_end_vs_s1 = orientation(s1.start, s1.end, s2.end);
    if same_strict_side(s2_start_vs_s1, s2_end_vs_s1) {
        return Classified::improper(Intersection::None, Method::OrientationReject);
    }

    let s1_start_vs_s2 = orientation(s2.start, s2.end, s1.start);
    let s1_end_vs_s2 = orientation(s2.start, s2.end, s1.end);
    if same_strict_side(s1_start_vs_s2, s1_end_vs_s2) {
        return Classified::improper(Intersection::None, Method::OrientationReject);
    }

    let orients = [s2_start_vs_s1, s2_end_vs_s1, s1_start_vs_s2, s1_end_vs_s2];
    if orients.iter().all(|o| o.is_collinear()) {
        return Classified::improper(collinear_intersection(s1, s2), Method::Collinear);
    }

    if orients.iter().any(|o| o.is_collinear()) {
        let p = if xy_equal(s1.start, s2.start) || xy_equal(s1.start, s2.end) {
            s1.start
        } else if xy_equal(s1.end, s2.start) || xy_equal(s1.end, s2.end) {
            s1.end
        } else if s2_start_vs_s1.is_collinear() {
            s2.start
        } else if s2_end_vs_s1.is_collinear() {
            s2.end
        } else if s1_start_vs_s2.is_collinear() {
            s1.start
        } else {
            s1.end
        };
        return Classified::improper(Intersection::Point(p), Method::Endpoint);
    }

    let (p, method) = proper_intersection(s1, s2, overlap.centre());
    Classified {
        result: Intersection::Point(p),
        method,
        proper: true,
    }
}

#[inline]
fn same_strict_side(a: Orientation, b: Orientation) -> bool {
    (a > Orientation::Collinear && b > Orientation::Collinear)
        || (a < Orientation::Collinear && b < Orientation::Collinear)
}

fn collinear_intersection(s1: &Segment, s2: &Segment) -> Intersection {
    let s2_start_in_s1 = point_within_segment_bounds(s2.start, s1.start, s1.end);
    let s2_end_in_s1 = point_within_segment_bounds(s2.end, s1.start, s1.end);
    let s1_start_in_s2 = point_within_segment_bounds(s1.start, s2.start, s2.end);
    let s1_end_in_s2 = point_within_segment_bounds(s1.end, s2.start, s2.end);

    let (a, b) = if s1_start_in_s2 && s1_end_in_s2 {
        (s1.start, s1.end)
    } else if s2_start_in_s1 && s2_end_in_s1 {
        (s2.start, s2.end)
    } else if s2_start_in_s1 && s1_start_in_s2 {
        (s2.start, s1.start)
    } else if s2_start_in_s1 && s1_end_in_s2 {
        (s2.start, s1.end)
    } else if s2_end_in_s1 && s1_start_in_s2 {
        (s2.end, s1.start)
    } else if s2_end_in_s1 && s1_end_in_s2 {
        (s2.end, s1.end)
    } else {
        return Intersection::None;
    };
    // Zero-extent overlap: segments touch end to end, or one is a point.
    if xy_equal(a, b) {
        Intersection::Point(a)
    } else {
        Intersection::Collinear(a, b)
    }
}

fn proper_intersection(s1: &Segment, s2: &Segment, norm: Coord) -> (Coord, Method) {
    let n1 = s1.translated(norm);
    let n2 = s2.translated(norm);
    let (solved, method) = match hcoords::intersection(&n1, &n2) {
        Ok(p) => (p, Method::Homogeneous),
        Err(err) => {
            tracing::trace!(%err, "homogeneous solve failed, using central endpoint");
            (central_endpoint(&n1, &n2), Method::CentralEndpoint)
        }
    };
    within_envelopes(s1, s2, solved + norm, method)
}

/// Keep `p` if it lies in both input envelopes, else fall back to the central endpoint.
pub(super) fn within_envelopes(
    s1: &Segment,
    s2: &Segment,
    p: Coord,
    method: Method,
) -> (Coord, Method) {
    if s1.envelope().contains(p) && s2.envelope().contains(p) {
        return (p, method);
    }
    tracing::trace!(
        x = p.x,
        y = p.y,
        "intersection outside input envelopes, using central endpoint"
    );
    (central_endpoint(s1, s2), Method::CentralEndpoint)
}

/// `true` if `p` lies on the closed segment `seg` (endpoints included).
pub fn point_on_segment(p: Coord, seg: &Segment) -> bool {
    point_within_segment_bounds(p, seg.start, seg.end)
        && orientation(seg.start, seg.end, p).is_collinear()
}

/// `true` if `p` lies on any segment of the polyline `line`.
///
/// Fails with `InvalidInput` if `line` has fewer than two coordinates.
pub fn is_on_line(p: Coord, line: &[Coord]) -> Result<bool> {
    if line.len() < 2 {
        return Err(GeomError::invalid(format!(
            "at least two coordinates are required to test a point against a line, got {}",
            line.len()
        )));
    }
    Ok(line
        .windows(2)
        .any(|w| point_on_segment(p, &Segment::new(w[0], w[1]))))
}
