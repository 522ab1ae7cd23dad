//! Segment intersection: robust intersector and its two solvers.
//!
//! Purpose
//! - Classify a pair of segments as disjoint, crossing at one point, or
//!   overlapping along a sub-segment, and return the geometry.
//!
//! Layout
//! - `robust`: the decision ladder (`intersect`, `classify`, point-on-segment).
//! - `hcoords`: homogeneous-coordinate line solve (fast, fragile alone).
//! - `central`: central-endpoint approximation (last resort, always an input point).
//! - `types`: `Intersection`, `Method`, `Classified`.
//!
//! Cross-refs: `orientation::orientation` (all topology decisions),
//! `exact::exact_line_intersection` (exact alternative for infinite lines).

mod central;
mod hcoords;
mod robust;
mod types;

pub use central::central_endpoint;
pub use hcoords::intersection as homogeneous_intersection;
pub use robust::{classify, intersect, is_on_line, point_on_segment};
pub use types::{Classified, Intersection, Method};
