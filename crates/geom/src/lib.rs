#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

//! Line segment and cubic bézier primitives on top of euclid.
//!
//! This crate is reexported in `nodepath`.
//!
//! # Overview.
//!
//! This crate implements the numerical kernel used by the path engine:
//!
//! - sampling and measuring line segments,
//! - sampling, measuring and splitting cubic bézier curves,
//! - exact and conservative bounding boxes of cubic bézier curves.
//!
//! # Parameterization
//!
//! All segments are parameterized by a normalized local position `t` between `0.0`
//! (the start of the segment) and `1.0` (its end). Note that for cubic bézier curves
//! `t` is not proportional to arc length.
//!
//! # Measuring curves
//!
//! The length of a cubic bézier curve has no closed form. It is approximated by
//! sampling the curve at evenly spaced parameters and summing the distances between
//! consecutive samples. The number of samples controls the trade-off between precision
//! and performance, [`DEFAULT_CURVE_SAMPLES`] is good enough for UI-scale paths.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod cubic_bezier;
mod line;
pub mod primitives;

#[doc(inline)]
pub use crate::cubic_bezier::{CubicBezierSegment, CurveSample};
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::primitives::{curve_length, curve_point, curve_point_extended, line_length, line_point};

pub use crate::scalar::Scalar;

/// Number of samples used to approximate the length of a cubic bézier curve
/// when the caller does not specify one.
pub const DEFAULT_CURVE_SAMPLES: u32 = 20;

mod scalar {
    pub(crate) use num_traits::Float;

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;

        /// Converts a sample count or an index into a scalar.
        fn from_count(n: u32) -> Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        #[inline]
        fn from_count(n: u32) -> Self {
            n as f32
        }
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        #[inline]
        fn from_count(n: u32) -> Self {
            n as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// Alias for `euclid::default::Transform2D`
pub type Transform<S> = euclid::default::Transform2D<S>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

pub mod traits {
    use crate::{Point, Scalar, Transform};

    pub trait Transformation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S>;
    }

    impl<S: Scalar> Transformation<S> for Transform<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            self.transform_point(p)
        }
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, S: Scalar, T: Transformation<S>> Transformation<S> for &'l T {
        #[inline]
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            (*self).transform_point(p)
        }
    }
}
