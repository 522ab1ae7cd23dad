//! Subcommand bodies. Each takes parsed coordinates and returns a serializable report.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use planar::area::{is_ring_counter_clockwise, signed_ring_area};
use planar::centroid::{lines_centroid, points_centroid, polygons_centroid};
use planar::coord::{xy_equal, Coord, Segment};
use planar::dedup::{unique_coords, XyOrder};
use planar::exact::exact_line_intersection;
use planar::intersect::{classify, Intersection};
use planar::orientation::{orientation, orientation_filter};
use planar::sample::{
    draw_near_collinear, draw_ring_radial, draw_segments, ReplayToken, RingCfg, VertexCount,
};
use planar::sorting::sort_radial;
use serde::Serialize;

fn xy(c: &Coord) -> [f64; 2] {
    [c.x, c.y]
}

fn xys(coords: &[Coord]) -> Vec<[f64; 2]> {
    coords.iter().map(xy).collect()
}

fn expect_count(coords: &[Coord], n: usize, what: &str) -> Result<()> {
    if coords.len() != n {
        bail!("{what} takes exactly {n} coordinates, got {}", coords.len());
    }
    Ok(())
}

/// Ring from an open or closed coordinate list; closed on return.
fn closed_ring(coords: &[Coord]) -> Vec<Coord> {
    let mut ring = coords.to_vec();
    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
        if !xy_equal(first, last) {
            ring.push(first);
        }
    }
    ring
}

#[derive(Debug, Serialize)]
pub struct OrientReport {
    pub orientation: String,
    /// `false` when the floating-point filter could not certify the sign.
    pub filter_decided: bool,
}

pub fn orient(coords: &[Coord]) -> Result<OrientReport> {
    expect_count(coords, 3, "orient")?;
    let (o, e, p) = (coords[0], coords[1], coords[2]);
    Ok(OrientReport {
        orientation: orientation(o, e, p).to_string(),
        filter_decided: orientation_filter(o, e, p).is_some(),
    })
}

#[derive(Debug, Serialize)]
pub struct IntersectReport {
    pub kind: &'static str,
    pub points: Vec<[f64; 2]>,
    pub method: String,
    pub proper: bool,
    /// Crossing of the two supporting lines in exact arithmetic, rounded once;
    /// `null` for parallel lines.
    pub exact_line_point: Option<[f64; 2]>,
}

pub fn intersect(coords: &[Coord]) -> Result<IntersectReport> {
    expect_count(coords, 4, "intersect")?;
    let s1 = Segment::new(coords[0], coords[1]);
    let s2 = Segment::new(coords[2], coords[3]);
    let c = classify(&s1, &s2);
    let kind = match c.result {
        Intersection::None => "none",
        Intersection::Point(_) => "point",
        Intersection::Collinear(..) => "collinear",
    };
    Ok(IntersectReport {
        kind,
        points: xys(&c.result.points()),
        method: format!("{:?}", c.method),
        proper: c.proper,
        exact_line_point: exact_line_intersection(&s1, &s2).map(|p| xy(&p)),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CentroidKind {
    /// Mean of all coordinates
    Points,
    /// Length-weighted centroid of the polyline through the coordinates
    Lines,
    /// Area-weighted centroid of the ring through the coordinates
    Area,
}

#[derive(Debug, Serialize)]
pub struct CentroidReport {
    pub kind: CentroidKind,
    pub centroid: [f64; 2],
}

pub fn centroid(kind: CentroidKind, coords: &[Coord]) -> Result<CentroidReport> {
    let c = match kind {
        CentroidKind::Points => points_centroid(coords),
        CentroidKind::Lines => lines_centroid(&[coords.to_vec()]),
        CentroidKind::Area => polygons_centroid(&[vec![closed_ring(coords)]])
            .context("computing area centroid")?,
    };
    Ok(CentroidReport {
        kind,
        centroid: xy(&c),
    })
}

#[derive(Debug, Serialize)]
pub struct AreaReport {
    /// Positive for clockwise rings.
    pub signed_area: f64,
    pub area: f64,
    pub counter_clockwise: bool,
}

pub fn area(coords: &[Coord]) -> Result<AreaReport> {
    let ring = closed_ring(coords);
    let signed = signed_ring_area(&ring);
    let ccw = is_ring_counter_clockwise(&ring).context("determining ring winding")?;
    Ok(AreaReport {
        signed_area: signed,
        area: signed.abs(),
        counter_clockwise: ccw,
    })
}

#[derive(Debug, Serialize)]
pub struct CoordsReport {
    pub count: usize,
    pub coords: Vec<[f64; 2]>,
}

impl CoordsReport {
    fn new(coords: &[Coord]) -> Self {
        Self {
            count: coords.len(),
            coords: xys(coords),
        }
    }
}

pub fn dedupe(coords: &[Coord]) -> CoordsReport {
    CoordsReport::new(&unique_coords(coords, XyOrder))
}

pub fn radial(focus: Coord, coords: &[Coord]) -> CoordsReport {
    let mut sorted = coords.to_vec();
    sort_radial(&mut sorted, focus);
    CoordsReport::new(&sorted)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Closed star-shaped ring (count = vertices)
    Ring,
    /// Segment endpoints, two coordinates per segment
    Segments,
    /// Nearly collinear triples, three coordinates per triple
    NearCollinear,
}

pub fn sample(kind: SampleKind, count: usize, extent: f64, tok: ReplayToken) -> Result<CoordsReport> {
    if !(extent.is_finite() && extent >= 0.0) {
        bail!("--extent must be finite and non-negative, got {extent}");
    }
    let coords: Vec<Coord> = match kind {
        SampleKind::Ring => draw_ring_radial(
            RingCfg {
                vertex_count: VertexCount::Fixed(count),
                radius: extent,
                ..RingCfg::default()
            },
            tok,
        ),
        SampleKind::Segments => draw_segments(count, extent, tok)
            .into_iter()
            .flat_map(|s| [s.start, s.end])
            .collect(),
        SampleKind::NearCollinear => (0..count as u64)
            .flat_map(|i| {
                draw_near_collinear(extent, ReplayToken::new(tok.seed, tok.index.wrapping_add(i)))
            })
            .collect(),
    };
    Ok(CoordsReport::new(&coords))
}
