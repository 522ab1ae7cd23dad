use super::*;
use crate::error::GeomError;
use nalgebra::vector;
use proptest::prelude::*;

fn square(x0: f64, y0: f64, side: f64) -> Vec<Coord> {
    vec![
        vector![x0, y0],
        vector![x0 + side, y0],
        vector![x0 + side, y0 + side],
        vector![x0, y0 + side],
        vector![x0, y0],
    ]
}

fn reversed(ring: &[Coord]) -> Vec<Coord> {
    ring.iter().rev().copied().collect()
}

fn assert_close(a: Coord, b: Coord, tol: f64) {
    assert!((a - b).norm() <= tol, "{a:?} != {b:?} (tol {tol})");
}

#[test]
fn unit_square_centroid_either_winding() {
    let ccw = square(0.0, 0.0, 1.0);
    let cw = reversed(&ccw);
    assert_eq!(polygons_centroid(&[vec![ccw]]).unwrap(), vector![0.5, 0.5]);
    assert_eq!(polygons_centroid(&[vec![cw]]).unwrap(), vector![0.5, 0.5]);
}

#[test]
fn hole_is_subtracted_whatever_its_winding() {
    let shell = square(0.0, 0.0, 4.0);
    let hole = square(1.0, 1.0, 1.0);
    let expected = vector![30.5 / 15.0, 30.5 / 15.0];

    let a = polygons_centroid(&[vec![shell.clone(), hole.clone()]]).unwrap();
    let b = polygons_centroid(&[vec![shell.clone(), reversed(&hole)]]).unwrap();
    let c = polygons_centroid(&[vec![reversed(&shell), reversed(&hole)]]).unwrap();
    assert_close(a, expected, 1e-12);
    assert_close(b, expected, 1e-12);
    assert_close(c, expected, 1e-12);

    let mut calc = AreaCentroid::new();
    calc.add_polygon(&[shell, hole]).unwrap();
    assert_eq!(calc.area(), 15.0);
}

#[test]
fn several_polygons_share_one_base_point() {
    let c = polygons_centroid(&[vec![square(0.0, 0.0, 1.0)], vec![square(2.0, 0.0, 1.0)]]).unwrap();
    assert_close(c, vector![1.5, 0.5], 1e-12);
}

#[test]
fn zero_area_polygon_uses_boundary_length() {
    // A-B-A ring: degenerate winding, no area.
    let spike = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![0.0, 0.0],
        vector![0.0, 0.0],
    ];
    assert_eq!(polygons_centroid(&[vec![spike]]).unwrap(), vector![1.0, 0.0]);

    let flat = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 2.0],
        vector![0.0, 0.0],
    ];
    assert_close(polygons_centroid(&[vec![flat]]).unwrap(), vector![1.0, 1.0], 1e-12);
}

#[test]
fn invalid_polygon_leaves_calculator_untouched() {
    let mut calc = AreaCentroid::new();
    calc.add_polygon(&[square(0.0, 0.0, 1.0)]).unwrap();

    let short = vec![vector![5.0, 5.0], vector![6.0, 5.0], vector![5.0, 5.0]];
    let err = calc.add_polygon(&[square(10.0, 10.0, 1.0), short]).unwrap_err();
    assert!(matches!(err, GeomError::InvalidInput { .. }));
    assert!(calc.add_polygon(&[]).is_err());
    assert!(calc.add_polygon(&[vec![]]).is_err());

    assert_eq!(calc.centroid(), vector![0.5, 0.5]);
}

#[test]
fn empty_calculators_return_origin() {
    assert_eq!(AreaCentroid::new().centroid(), Coord::zeros());
    assert_eq!(LineCentroid::new().centroid(), Coord::zeros());
    assert_eq!(PointCentroid::new().centroid(), Coord::zeros());
    assert_eq!(polygons_centroid(&[]).unwrap(), Coord::zeros());
    assert_eq!(lines_centroid(&[vec![vector![3.0, 3.0], vector![3.0, 3.0]]]), Coord::zeros());
}

#[test]
fn point_centroid_is_the_mean() {
    let pts = [vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 3.0]];
    assert_eq!(points_centroid(&pts), vector![1.0, 1.0]);

    let mut calc = PointCentroid::new();
    calc.add_flat(&[0.0, 0.0, 7.0, 4.0, 2.0, -7.0], 3).unwrap();
    assert_eq!(calc.len(), 2);
    assert_eq!(calc.centroid(), vector![2.0, 1.0]);
    assert!(calc.add_flat(&[1.0], 1).is_err());
}

#[test]
fn line_centroid_weights_by_length() {
    let long = vec![vector![0.0, 0.0], vector![4.0, 0.0]];
    let short = vec![vector![0.0, 2.0], vector![0.0, 4.0]];
    // (4 * (2, 0) + 2 * (0, 3)) / 6
    assert_close(lines_centroid(&[long, short]), vector![8.0 / 6.0, 1.0], 1e-12);

    let mut calc = LineCentroid::new();
    calc.add_polygon(&[square(0.0, 0.0, 2.0)]);
    assert_eq!(calc.total_length(), 8.0);
    assert_eq!(calc.centroid(), vector![1.0, 1.0]);
}

#[test]
fn shape_dispatch() {
    let pts = Shape::Points(vec![vector![1.0, 1.0], vector![3.0, 1.0]]);
    assert_eq!(centroid(&pts).unwrap(), vector![2.0, 1.0]);
    let lines = Shape::Lines(vec![vec![vector![0.0, 0.0], vector![0.0, 2.0]]]);
    assert_eq!(centroid(&lines).unwrap(), vector![0.0, 1.0]);
    let polys = Shape::Polygons(vec![vec![square(0.0, 0.0, 1.0)]]);
    assert_eq!(centroid(&polys).unwrap(), vector![0.5, 0.5]);
    assert!(centroid(&Shape::Polygons(vec![vec![]])).is_err());
}

proptest! {
    #[test]
    fn triangle_area_centroid_is_vertex_mean(
        a in (-100f64..100.0, -100f64..100.0),
        b in (-100f64..100.0, -100f64..100.0),
        c in (-100f64..100.0, -100f64..100.0),
    ) {
        let (a, b, c) = (vector![a.0, a.1], vector![b.0, b.1], vector![c.0, c.1]);
        prop_assume!(crate::area::area2(a, b, c).abs() > 1.0);
        let got = polygons_centroid(&[vec![vec![a, b, c, a]]]).unwrap();
        let want = (a + b + c) / 3.0;
        prop_assert!((got - want).norm() < 1e-8);
    }
}
