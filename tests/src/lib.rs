//! Shared fixtures for the cross-crate tests and benchmarks.

use nodepath::algorithms::sample::points;
use nodepath::math::{point, Box2D, Point};
use nodepath::path::builder::{ArrowStyle, PathBuilder};
use nodepath::path::Path;

#[cfg(test)]
mod properties;

/// Installs a logger printing to the test output. Can be called several times.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `MoveTo(0, 0), LineTo(100, 0), LineTo(100, 100)`.
pub fn corner() -> Path {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(100.0, 0.0));
    path.line_to(point(100.0, 100.0));

    path
}

/// A path mixing lines, curves, close commands and several contours.
pub fn mixed() -> Path {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(100.0, 0.0));
    path.curve_to(point(150.0, 0.0), point(150.0, 100.0), point(100.0, 100.0));
    path.line_to(point(0.0, 100.0));
    path.close();
    path.move_to(point(200.0, 0.0));
    path.curve_to(point(200.0, 80.0), point(300.0, 80.0), point(300.0, 0.0));

    path
}

/// A collection of paths covering every command and the shape helpers.
pub fn test_paths() -> Vec<Path> {
    let mut paths = vec![corner(), mixed()];

    let mut shapes = Path::new();
    shapes.add_rounded_rectangle(&Box2D::new(point(0.0, 0.0), point(80.0, 40.0)), 0.2);
    paths.push(shapes);

    let mut oval = Path::new();
    oval.add_oval(&Box2D::new(point(-50.0, -20.0), point(50.0, 20.0)));
    paths.push(oval);

    let mut star = Path::new();
    star.add_star(point(0.0, 0.0), 7, 100.0, 40.0);
    paths.push(star);

    let mut arrow = Path::new();
    arrow.add_arrow(point(100.0, 100.0), 60.0, ArrowStyle::FortyFive);
    paths.push(arrow);

    paths
}

/// Samples `amount` positions evenly spread along the path.
///
/// Panics if the path can't be sampled.
pub fn sample_positions(path: &Path, amount: usize) -> Vec<Point> {
    let samples = match points(path, amount) {
        Ok(samples) => samples,
        Err(e) => panic!("can't sample {:?}: {}", path, e),
    };

    samples
        .map(|sample| match sample {
            Ok(sample) => sample.position(),
            Err(e) => panic!("failed to sample {:?}: {}", path, e),
        })
        .collect()
}

/// Distance from `p` to the closest segment of the polyline going through `polyline`.
pub fn distance_to_polyline(p: Point, polyline: &[Point]) -> f64 {
    polyline
        .windows(2)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            let ab = b - a;
            let len2 = ab.square_length();
            let t = if len2 == 0.0 {
                0.0
            } else {
                ((p - a).dot(ab) / len2).max(0.0).min(1.0)
            };
            (a + ab * t - p).length()
        })
        .fold(f64::INFINITY, f64::min)
}

pub fn assert_approx_eq(a: Point, b: Point, tolerance: f64) {
    if (a - b).length() > tolerance {
        panic!("{:?} != {:?} (tolerance {})", a, b, tolerance);
    }
}
