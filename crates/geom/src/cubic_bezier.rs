use crate::scalar::Scalar;
use crate::{point, Box2D, Point};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

/// A point on a cubic bézier curve along with the control points of the two
/// sub-curves obtained by splitting the curve at that point.
///
/// `ctrl1` and `ctrl2` are the handles adjacent to `position`: the second control
/// point of the sub-curve before the split and the first control point of the
/// sub-curve after it. Together they give the tangent at `position`.
///
/// `handle1` and `handle2` are the outer control points: the first control point of the
/// sub-curve before the split and the second control point of the sub-curve after it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CurveSample<S> {
    pub position: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub handle1: Point<S>,
    pub handle2: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.x * one_t3
            + self.ctrl1.x * S::THREE * one_t2 * t
            + self.ctrl2.x * S::THREE * one_t * t2
            + self.to.x * t3
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.y * one_t3
            + self.ctrl1.y * S::THREE * one_t2 * t
            + self.ctrl2.y * S::THREE * one_t * t2
            + self.to.y * t3
    }

    /// Sample the curve at t using De Casteljau's algorithm and return the control
    /// points of both sub-curves along with the sampled position.
    ///
    /// Replacing this curve with
    /// `(from, handle1, ctrl1, position)` and `(position, ctrl2, handle2, to)`
    /// does not change its shape.
    pub fn sample_with_handles(&self, t: S) -> CurveSample<S> {
        let (before, after) = self.split(t);

        CurveSample {
            position: before.to,
            ctrl1: before.ctrl2,
            ctrl2: after.ctrl1,
            handle1: before.ctrl1,
            handle2: after.ctrl2,
        }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    /// Approximates the length of the curve by sampling it at `samples + 1` evenly
    /// spaced parameters (both endpoints included) and summing the distances between
    /// consecutive samples.
    ///
    /// A sample count of zero is treated as one, which measures the baseline.
    pub fn approximate_length(&self, samples: u32) -> S {
        let samples = samples.max(1);
        let step = S::ONE / S::from_count(samples);

        let mut length = S::ZERO;
        let mut prev = self.from;
        for i in 1..=samples {
            let p = if i == samples {
                self.to
            } else {
                self.sample(S::from_count(i) * step)
            };
            length += (p - prev).length();
            prev = p;
        }

        length
    }

    /// Returns a conservative rectangle the curve is contained in.
    ///
    /// This method is faster than `bounding_box` but more conservative.
    pub fn fast_bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.fast_bounding_range_x();
        let (min_y, max_y) = self.fast_bounding_range_y();

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns a conservative range of x that contains this curve.
    #[inline]
    pub fn fast_bounding_range_x(&self) -> (S, S) {
        let min_x = self
            .from
            .x
            .min(self.ctrl1.x)
            .min(self.ctrl2.x)
            .min(self.to.x);
        let max_x = self
            .from
            .x
            .max(self.ctrl1.x)
            .max(self.ctrl2.x)
            .max(self.to.x);

        (min_x, max_x)
    }

    /// Returns a conservative range of y that contains this curve.
    #[inline]
    pub fn fast_bounding_range_y(&self) -> (S, S) {
        let min_y = self
            .from
            .y
            .min(self.ctrl1.y)
            .min(self.ctrl2.y)
            .min(self.to.y);
        let max_y = self
            .from
            .y
            .max(self.ctrl1.y)
            .max(self.ctrl2.y)
            .max(self.to.y);

        (min_y, max_y)
    }

    /// Returns the smallest rectangle the curve is contained in.
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns the smallest range of x that contains this curve.
    pub fn bounding_range_x(&self) -> (S, S) {
        let mut min = self.from.x.min(self.to.x);
        let mut max = self.from.x.max(self.to.x);
        for t in Self::local_extrema(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x) {
            let x = self.x(t);
            min = min.min(x);
            max = max.max(x);
        }

        (min, max)
    }

    /// Returns the smallest range of y that contains this curve.
    pub fn bounding_range_y(&self) -> (S, S) {
        let mut min = self.from.y.min(self.to.y);
        let mut max = self.from.y.max(self.to.y);
        for t in Self::local_extrema(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y) {
            let y = self.y(t);
            min = min.min(y);
            max = max.max(y);
        }

        (min, max)
    }

    /// Returns the parameters strictly inside `]0, 1[` where the curve reaches a local
    /// extremum along one axis.
    fn local_extrema(p0: S, p1: S, p2: S, p3: S) -> ArrayVec<S, 2> {
        // The derivative of a cubic bezier curve is a second degree polynomial
        // f(x) = a * x² + b * x + c such as:
        let a = S::THREE * (p3 + S::THREE * (p1 - p2) - p0);
        let b = S::SIX * (p2 - S::TWO * p1 + p0);
        let c = S::THREE * (p1 - p0);

        fn in_range<S: Scalar>(t: S) -> bool {
            t > S::ZERO && t < S::ONE
        }

        let mut result = ArrayVec::new();

        // If the derivative is a linear function
        if a == S::ZERO {
            if b != S::ZERO {
                let t = -c / b;
                if in_range(t) {
                    result.push(t);
                }
            }
            return result;
        }

        let discriminant = b * b - S::FOUR * a * c;

        // There is no Real solution for the equation
        if discriminant < S::ZERO {
            return result;
        }

        // There is one Real solution for the equation
        if discriminant == S::ZERO {
            let t = -b / (S::TWO * a);
            if in_range(t) {
                result.push(t);
            }
            return result;
        }

        // There are two Real solutions for the equation
        let discriminant_sqrt = discriminant.sqrt();

        let mut first_extremum = (-b - discriminant_sqrt) / (S::TWO * a);
        let mut second_extremum = (-b + discriminant_sqrt) / (S::TWO * a);
        if first_extremum > second_extremum {
            core::mem::swap(&mut first_extremum, &mut second_extremum);
        }

        if in_range(first_extremum) {
            result.push(first_extremum);
        }

        if in_range(second_extremum) {
            result.push(second_extremum);
        }

        result
    }
}

#[cfg(test)]
fn assert_approx_eq(a: Point<f64>, b: Point<f64>) {
    if (a - b).length() > 1e-9 {
        panic!("{:?} != {:?}", a, b);
    }
}

#[test]
fn sample_endpoints() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 100.0),
        ctrl1: point(0.0, 50.0),
        ctrl2: point(100.0, 50.0),
        to: point(100.0, 100.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert_approx_eq(curve.sample(0.5), point(50.0, 62.5));
    assert_eq!(curve.x(0.5), curve.sample(0.5).x);
    assert_eq!(curve.y(0.5), curve.sample(0.5).y);
}

#[test]
fn sample_with_handles_matches_split() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 100.0),
        ctrl1: point(0.0, 50.0),
        ctrl2: point(100.0, 50.0),
        to: point(100.0, 100.0),
    };

    let s = curve.sample_with_handles(0.5);
    assert_approx_eq(s.position, point(50.0, 62.5));
    assert_approx_eq(s.handle1, point(0.0, 75.0));
    assert_approx_eq(s.ctrl1, point(25.0, 62.5));
    assert_approx_eq(s.ctrl2, point(75.0, 62.5));
    assert_approx_eq(s.handle2, point(100.0, 75.0));

    let (before, after) = curve.split(0.5);
    assert_eq!(before.from, curve.from);
    assert_eq!(before.to, s.position);
    assert_eq!(after.from, s.position);
    assert_eq!(after.to, curve.to);

    // Both halves trace the original curve.
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert_approx_eq(before.sample(t), curve.sample(t * 0.5));
        assert_approx_eq(after.sample(t), curve.sample(0.5 + t * 0.5));
    }
}

#[test]
fn approximate_length_of_collinear_curve() {
    let curve = CubicBezierSegment {
        from: point(1.0f64, 2.0),
        ctrl1: point(3.0, 4.0),
        ctrl2: point(5.0, 6.0),
        to: point(7.0, 8.0),
    };

    let expected = 72.0f64.sqrt();
    assert!((curve.approximate_length(20) - expected).abs() < 1e-9);
    assert!((curve.approximate_length(0) - expected).abs() < 1e-9);
}

#[test]
fn approximate_length_converges() {
    // A quarter of a circle of radius 100.
    let k = 0.5522847498;
    let curve = CubicBezierSegment {
        from: point(100.0f64, 0.0),
        ctrl1: point(100.0, 100.0 * k),
        ctrl2: point(100.0 * k, 100.0),
        to: point(0.0, 100.0),
    };

    let quarter = core::f64::consts::PI * 50.0;
    let coarse = curve.approximate_length(2);
    let fine = curve.approximate_length(200);
    assert!(coarse < fine);
    assert!((fine - quarter).abs() < 0.1);
}

#[test]
fn bounding_boxes() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };

    let fast = curve.fast_bounding_box();
    assert_eq!(fast.min, point(0.0, 0.0));
    assert_eq!(fast.max, point(100.0, 100.0));

    let tight = curve.bounding_box();
    assert_eq!(tight.min, point(0.0, 0.0));
    assert_eq!(tight.max.x, 100.0);
    assert!((tight.max.y - 75.0).abs() < 1e-9);
}
