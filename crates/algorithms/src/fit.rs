//! Construct smooth paths going through a list of points.

use crate::math::{Point, Vector};
use crate::path::{Path, PathElement, Position};

/// Default curvature of [`find_path`], producing the smoothest curves.
pub const DEFAULT_CURVATURE: f64 = 1.0;

/// Constructs a smooth path going through each of the points, in order.
///
/// The path starts with a move-to and contains one cubic bézier curve per pair of
/// consecutive points. The tangents at each interior point are obtained by solving a
/// tridiagonal system per axis, the tangents at both ends are zero.
///
/// `curvature` is clamped between `0.0` and `1.0`. Lower values stitch the curves
/// together more tightly, a curvature of zero produces a polyline with a line-to for
/// each of the points (including the first one).
///
/// Less than three points can't be smoothed: no point produces an empty path, one point
/// a single move-to and two points a straight line.
///
/// # Example
///
/// ```
/// use nodepath_algorithms::fit::{find_path, DEFAULT_CURVATURE};
///
/// let path = find_path(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)], DEFAULT_CURVATURE);
///
/// // A move-to and two curves.
/// assert_eq!(path.len(), 3);
/// ```
pub fn find_path<Points>(points: Points, curvature: f64) -> Path
where
    Points: IntoIterator,
    Points::Item: Position,
{
    let points: Vec<Point> = points.into_iter().map(|p| p.position()).collect();
    let n = points.len();

    match n {
        0 => return Path::new(),
        1 => return Path::from_elements(vec![PathElement::MoveTo(points[0])]),
        2 => {
            return Path::from_elements(vec![
                PathElement::MoveTo(points[0]),
                PathElement::LineTo(points[1]),
            ])
        }
        _ => {}
    }

    let clamped = curvature.max(0.0).min(1.0);
    if clamped != curvature {
        log::debug!("curvature {} clamped to {}", curvature, clamped);
    }

    let mut path = Path::with_capacity(n + 1);

    if clamped == 0.0 {
        log::debug!("zero curvature, building a polyline through {} points", n);
        path.push(PathElement::MoveTo(points[0]));
        for &p in &points {
            path.push(PathElement::LineTo(p));
        }

        return path;
    }

    let tension = 4.0 + (1.0 - clamped) * 40.0;
    let tangents = solve_tangents(&points, tension);

    path.push(PathElement::MoveTo(points[0]));
    for i in 0..n - 1 {
        path.push(PathElement::CurveTo {
            ctrl1: points[i] + tangents[i],
            ctrl2: points[i + 1] - tangents[i + 1],
            to: points[i + 1],
        });
    }

    path
}

// Forward elimination then back substitution, both axes at once. Expects at least
// three points.
fn solve_tangents(points: &[Point], tension: f64) -> Vec<Vector> {
    let n = points.len();

    let mut b = vec![0.0; n];
    let mut a = vec![Vector::zero(); n];
    let mut d = vec![Vector::zero(); n];

    b[1] = -0.25;
    a[1] = (points[2] - points[0] - d[0]) / 4.0;
    for i in 2..n - 1 {
        b[i] = -1.0 / (tension + b[i - 1]);
        a[i] = -(points[i + 1] - points[i - 1] - a[i - 1]) * b[i];
    }

    for i in (1..n - 1).rev() {
        d[i] = a[i] + d[i + 1] * b[i];
    }

    d
}

#[cfg(test)]
use crate::math::{point, vector};
#[cfg(test)]
use crate::path::PathCommand;

#[test]
fn degenerate_inputs() {
    assert!(find_path(Vec::<Point>::new(), 1.0).is_empty());

    assert_eq!(
        find_path(&[(1.0, 2.0)], 1.0).elements(),
        &[PathElement::MoveTo(point(1.0, 2.0))]
    );

    assert_eq!(
        find_path(&[[1.0, 2.0], [3.0, 4.0]], 0.5).elements(),
        &[
            PathElement::MoveTo(point(1.0, 2.0)),
            PathElement::LineTo(point(3.0, 4.0)),
        ]
    );
}

#[test]
fn zero_curvature() {
    let points = [point(0.0, 0.0), point(10.0, 10.0), point(20.0, 0.0), point(30.0, 10.0)];

    for &curvature in &[0.0, -1.0] {
        let path = find_path(&points, curvature);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], PathElement::MoveTo(points[0]));
        for (element, p) in path.elements()[1..].iter().zip(points.iter()) {
            assert_eq!(*element, PathElement::LineTo(*p));
        }
    }
}

#[test]
fn interpolates_every_point() {
    let points = [
        point(0.0, 0.0),
        point(40.0, 80.0),
        point(100.0, 20.0),
        point(150.0, 90.0),
        point(200.0, 0.0),
    ];

    for &curvature in &[1.0, 0.5, 0.1, 2.0] {
        let path = find_path(&points, curvature);
        assert_eq!(path.len(), points.len());
        assert_eq!(path[0], PathElement::MoveTo(points[0]));
        for (element, p) in path.elements()[1..].iter().zip(points[1..].iter()) {
            assert_eq!(element.command(), PathCommand::CurveTo);
            assert_eq!(element.point(), Some(*p));
        }

        // The tangents at both ends are zero.
        assert_eq!(path[1].ctrl1(), Some(points[0]));
        assert_eq!(path[4].ctrl2(), Some(points[4]));
    }
}

#[test]
fn three_points() {
    let path = find_path(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)], 1.0);

    // The tangent at the middle point is (p2 - p0) / 4.
    let d = vector(25.0, 0.0);
    assert_eq!(
        path[1],
        PathElement::CurveTo {
            ctrl1: point(0.0, 0.0),
            ctrl2: point(50.0, 50.0) - d,
            to: point(50.0, 50.0),
        }
    );
    assert_eq!(
        path[2],
        PathElement::CurveTo {
            ctrl1: point(50.0, 50.0) + d,
            ctrl2: point(100.0, 0.0),
            to: point(100.0, 0.0),
        }
    );
}

#[test]
fn curvature_controls_tangents() {
    let points = [point(0.0, 0.0), point(50.0, 50.0), point(100.0, 0.0), point(150.0, 50.0)];

    let tangent = |curvature: f64| {
        let path = find_path(&points, curvature);
        let ctrl = path[3].ctrl1().unwrap();
        (ctrl - points[2]).length()
    };

    // Lower curvature means higher tension and shorter tangents.
    assert!(tangent(0.2) < tangent(1.0));
    assert!(tangent(0.2) > 0.0);
}
