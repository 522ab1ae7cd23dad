//! Centroid calculators for point, line, and area geometry.
//!
//! Purpose
//! - Accumulate the centroid of one or more geometries of the same dimension
//!   through owned builders: `new()`, repeated `add_*`, then `centroid()`.
//!
//! Degenerate input
//! - Nothing added, or only zero-length lines: the origin `(0, 0)`.
//! - Polygons with zero net area fall back to the length-weighted centroid of
//!   their boundaries.
//!
//! Cross-refs: `area::is_ring_counter_clockwise` (ring roles), `Shape` for
//! dispatch by geometry kind.

mod area;
mod line;
mod point;

pub use area::AreaCentroid;
pub use line::LineCentroid;
pub use point::PointCentroid;

use crate::coord::Coord;
use crate::error::Result;

/// Geometry kinds with a centroid, each holding one or more members.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Individual points.
    Points(Vec<Coord>),
    /// Polylines (rings included).
    Lines(Vec<Vec<Coord>>),
    /// Polygons as ring lists, shell first.
    Polygons(Vec<Vec<Vec<Coord>>>),
}

/// Mean of `points`.
pub fn points_centroid(points: &[Coord]) -> Coord {
    PointCentroid::new().add_points(points).centroid()
}

/// Length-weighted centroid of `lines`.
pub fn lines_centroid(lines: &[Vec<Coord>]) -> Coord {
    let mut calc = LineCentroid::new();
    for line in lines {
        calc.add_line(line);
    }
    calc.centroid()
}

/// Area-weighted centroid of `polygons`.
pub fn polygons_centroid(polygons: &[Vec<Vec<Coord>>]) -> Result<Coord> {
    let mut calc = AreaCentroid::new();
    for rings in polygons {
        calc.add_polygon(rings)?;
    }
    Ok(calc.centroid())
}

/// Centroid of any `Shape`, computed by the calculator matching its dimension.
pub fn centroid(shape: &Shape) -> Result<Coord> {
    match shape {
        Shape::Points(points) => Ok(points_centroid(points)),
        Shape::Lines(lines) => Ok(lines_centroid(lines)),
        Shape::Polygons(polygons) => polygons_centroid(polygons),
    }
}

#[cfg(test)]
mod tests;
