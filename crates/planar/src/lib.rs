//! Robust planar geometry primitives.
//!
//! Orientation, segment intersection, distance, area, centroids, and exact
//! coordinate deduplication over `f64` coordinates, correct under rounding
//! error, near-collinear input, and degenerate (zero-length, zero-area) shapes.
//!
//! Layering (leaf first)
//! - `coord`: `Coord`, `Segment`, `Envelope`, flat-ordinate readers.
//! - `orientation` + `exact`: filtered predicate with exact rational fallback.
//! - `intersect`: robust segment intersector and its solvers.
//! - `distance`, `area`, `angle`, `centroid`, `dedup`, `sorting`: built on the above.
//! - `sample`: reproducible random inputs for tests, benches, and experiments.
//!
//! API Policy
//! - All operations are pure functions or owned single-writer builders; no
//!   global state, no interior mutability.
//! - Only structurally invalid input is an error (`GeomError`); degenerate
//!   geometry has defined fallbacks.

pub mod angle;
pub mod area;
mod cfg;
pub mod centroid;
pub mod coord;
pub mod dedup;
pub mod distance;
pub mod error;
pub mod exact;
pub mod intersect;
pub mod orientation;
pub mod sample;
pub mod sorting;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use coord::{Coord, Envelope, Segment};
pub use error::{GeomError, Result};
pub use intersect::{intersect, Intersection};
pub use orientation::{orientation, Orientation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{is_ring_counter_clockwise, signed_ring_area};
    pub use crate::centroid::{
        centroid, lines_centroid, points_centroid, polygons_centroid, AreaCentroid, LineCentroid,
        PointCentroid, Shape,
    };
    pub use crate::coord::{distance, Coord, Envelope, Segment};
    pub use crate::dedup::{unique_coords, Compare, FnCompare, TreeSet, XyOrder};
    pub use crate::distance::{point_segment_distance, segment_segment_distance};
    pub use crate::error::{GeomError, Result};
    pub use crate::intersect::{classify, intersect, Classified, Intersection, Method};
    pub use crate::orientation::{orientation, Orientation};
    pub use crate::sorting::{sort_radial, sort_xy};
}
