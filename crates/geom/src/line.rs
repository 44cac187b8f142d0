use crate::scalar::Scalar;
use crate::Point;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        (self.to - self.from).length()
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn length() {
    let l = LineSegment {
        from: point(1.0f64, 1.0),
        to: point(5.0, 4.0),
    };

    assert_eq!(l.length(), 5.0);
    assert_eq!(LineSegment { from: l.to, to: l.to }.length(), 0.0);
}

#[test]
fn sample_endpoints_and_middle() {
    let l = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(100.0, 50.0),
    };

    assert_eq!(l.sample(0.0), l.from);
    assert_eq!(l.sample(1.0), l.to);
    assert_eq!(l.sample(0.5), point(50.0, 25.0));

    let l32 = LineSegment {
        from: point(0.0f32, 0.0),
        to: point(10.0, 0.0),
    };
    assert_eq!(l32.sample(0.25), point(2.5, 0.0));
}
