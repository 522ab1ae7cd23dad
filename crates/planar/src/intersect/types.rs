//! Result types for segment intersection.

use crate::coord::Coord;

/// Outcome of intersecting two segments.
///
/// `Collinear(a, b)` gives the endpoints of the shared sub-segment in no
/// particular orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    None,
    Point(Coord),
    Collinear(Coord, Coord),
}

impl Intersection {
    #[inline]
    pub fn has_intersection(&self) -> bool {
        !matches!(self, Intersection::None)
    }

    /// Intersection points (0, 1 or 2 of them).
    pub fn points(&self) -> Vec<Coord> {
        match *self {
            Intersection::None => Vec::new(),
            Intersection::Point(p) => vec![p],
            Intersection::Collinear(a, b) => vec![a, b],
        }
    }
}

/// Which tier of the intersector produced the decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Bounding boxes are disjoint.
    EnvelopeReject,
    /// Both endpoints of one segment lie strictly on one side of the other.
    OrientationReject,
    /// All four endpoints are collinear; resolved by envelope containment.
    Collinear,
    /// An endpoint lies on the other segment and is copied as the result.
    Endpoint,
    /// Normalized homogeneous-coordinate solve, verified against the envelopes.
    Homogeneous,
    /// Central-endpoint approximation after the homogeneous solve failed or
    /// landed outside the input envelopes.
    CentralEndpoint,
}

/// Intersection result plus the path taken to compute it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classified {
    pub result: Intersection,
    pub method: Method,
    /// `true` for a single interior crossing (no endpoint of either segment involved).
    pub proper: bool,
}

impl Classified {
    #[inline]
    pub(crate) fn improper(result: Intersection, method: Method) -> Self {
        Self {
            result,
            method,
            proper: false,
        }
    }
}
