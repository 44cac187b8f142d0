//! The numerical kernel of the path engine.
//!
//! Free-function forms of the segment operations, parameterized by a local `t`
//! between `0.0` and `1.0`. Higher level path operations are built on top of these
//! and never special-case geometry themselves.

use crate::scalar::Scalar;
use crate::{CubicBezierSegment, CurveSample, LineSegment, Point};

/// Linear interpolation between `from` and `to`.
#[inline]
pub fn line_point<S: Scalar>(t: S, from: Point<S>, to: Point<S>) -> Point<S> {
    LineSegment { from, to }.sample(t)
}

/// Euclidean distance between `from` and `to`.
#[inline]
pub fn line_length<S: Scalar>(from: Point<S>, to: Point<S>) -> S {
    LineSegment { from, to }.length()
}

/// Evaluates the cubic bézier curve at `t`.
///
/// Returns the point on the curve followed by the two handles adjacent to it
/// (see [`CurveSample`]).
#[inline]
pub fn curve_point<S: Scalar>(
    t: S,
    from: Point<S>,
    ctrl1: Point<S>,
    ctrl2: Point<S>,
    to: Point<S>,
) -> (Point<S>, Point<S>, Point<S>) {
    let sample = curve_point_extended(t, from, ctrl1, ctrl2, to);

    (sample.position, sample.ctrl1, sample.ctrl2)
}

/// Evaluates the cubic bézier curve at `t` and returns every control point needed
/// to split the curve at `t` without altering its shape.
#[inline]
pub fn curve_point_extended<S: Scalar>(
    t: S,
    from: Point<S>,
    ctrl1: Point<S>,
    ctrl2: Point<S>,
    to: Point<S>,
) -> CurveSample<S> {
    CubicBezierSegment {
        from,
        ctrl1,
        ctrl2,
        to,
    }
    .sample_with_handles(t)
}

/// Approximates the arc length of the cubic bézier curve with `samples` chords.
#[inline]
pub fn curve_length<S: Scalar>(
    from: Point<S>,
    ctrl1: Point<S>,
    ctrl2: Point<S>,
    to: Point<S>,
    samples: u32,
) -> S {
    CubicBezierSegment {
        from,
        ctrl1,
        ctrl2,
        to,
    }
    .approximate_length(samples)
}

#[cfg(test)]
use crate::{point, DEFAULT_CURVE_SAMPLES};

#[test]
fn line_primitives() {
    let a = point(0.0f64, 0.0);
    let b = point(100.0, 0.0);

    assert_eq!(line_point(0.1, a, b), point(10.0, 0.0));
    assert_eq!(line_length(a, b), 100.0);
    assert_eq!(line_length(point(0.0, 0.0), point(3.0, 4.0)), 5.0);
}

#[test]
fn curve_primitives() {
    let from = point(0.0f64, 100.0);
    let ctrl1 = point(0.0, 50.0);
    let ctrl2 = point(100.0, 50.0);
    let to = point(100.0, 100.0);

    let (p, c1, c2) = curve_point(0.5, from, ctrl1, ctrl2, to);
    let extended = curve_point_extended(0.5, from, ctrl1, ctrl2, to);
    assert_eq!(p, extended.position);
    assert_eq!(c1, extended.ctrl1);
    assert_eq!(c2, extended.ctrl2);

    let (start, _, _) = curve_point(0.0, from, ctrl1, ctrl2, to);
    let (end, _, _) = curve_point(1.0, from, ctrl1, ctrl2, to);
    assert_eq!(start, from);
    assert_eq!(end, to);

    let coarse = curve_length(from, ctrl1, ctrl2, to, 1);
    let default = curve_length(from, ctrl1, ctrl2, to, DEFAULT_CURVE_SAMPLES);
    assert_eq!(coarse, 100.0);
    assert!(default > coarse);
}
