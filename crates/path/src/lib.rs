#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures and traits to work with vector paths.
//!
//! # Overview
//!
//! A [`Path`] is an ordered sequence of [`PathElement`]s: move-to, line-to, cubic
//! curve-to and close commands. A path can hold several *contours*, each starting at a
//! move-to and running until the next move-to or the end of the sequence. A close
//! command implicitly draws a line back to the start of the current contour.
//!
//! Paths are built incrementally through the [`PathBuilder`](traits::PathBuilder)
//! trait, which also provides helpers to add common shapes (rectangles, ovals, stars,
//! arrows, ...).
//!
//! ```
//! use nodepath_path::Path;
//! use nodepath_path::math::point;
//! use nodepath_path::traits::PathBuilder;
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0));
//! path.line_to(point(100.0, 0.0));
//! path.curve_to(point(150.0, 0.0), point(150.0, 100.0), point(100.0, 100.0));
//! path.close();
//!
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.contours().count(), 1);
//! ```
//!
//! # Path events
//!
//! Iterating over a path yields one [`PathEvent`] per element. Events resolve the
//! implicit geometry of each element: the start of a line or curve is the end of the
//! previous element, and a close event carries both the current position and the start
//! of the contour it closes.

pub use nodepath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod element;
mod events;
pub mod measure;
pub mod path;

#[doc(inline)]
pub use crate::element::{PathCommand, PathElement};
pub use crate::events::*;
#[doc(inline)]
pub use crate::path::{Contours, Path};

use math::Point;

pub mod traits {
    //! `nodepath_path` traits reexported here for convenience.

    pub use crate::builder::PathBuilder;
    pub use crate::geom::traits::Transformation;
}

pub mod math {
    //! f64 version of the nodepath_geom types used everywhere. Most other nodepath
    //! crates reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```
    pub type Box2D = euclid::default::Box2D<f64>;

    /// Alias for ```euclid::default::Transform2D<f64>```
    pub type Transform = euclid::default::Transform2D<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

/// Interface for types that have a 2D position.
///
/// This is how the APIs accepting lists of points normalize their input: anything
/// implementing `Position` (points, `(x, y)` tuples, `[x, y]` arrays or references
/// to those) is converted to a [`Point`](math::Point) before any computation happens.
pub trait Position {
    fn position(&self) -> Point;
}

impl<U> Position for crate::geom::euclid::Point2D<f64, U> {
    fn position(&self) -> Point {
        self.to_untyped()
    }
}

impl<'l, T: Position> Position for &'l T {
    fn position(&self) -> Point {
        (*self).position()
    }
}

impl Position for (f64, f64) {
    fn position(&self) -> Point {
        Point::new(self.0, self.1)
    }
}

impl Position for [f64; 2] {
    fn position(&self) -> Point {
        Point::new(self[0], self[1])
    }
}

#[test]
fn positions_normalize_to_points() {
    use math::point;

    assert_eq!(point(1.0, 2.0).position(), point(1.0, 2.0));
    assert_eq!((1.0, 2.0).position(), point(1.0, 2.0));
    assert_eq!([1.0, 2.0].position(), point(1.0, 2.0));
    assert_eq!((&(3.0, 4.0)).position(), point(3.0, 4.0));
}
