#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! 2d path measurement, sampling and construction algorithms.
//!
//! This crate is reexported in `nodepath`.
//!
//! # Overview
//!
//! - [`length`]: segment lengths and total length of a path.
//! - [`sample`]: positions along a path addressed by a global parameter `t`
//!   between `0.0` and `1.0`.
//! - [`fit`]: smooth paths going through a list of points.
//! - [`insert`]: extra on-curve anchors that don't alter the shape of a path.
//! - [`aabb`]: bounding rectangles.
//!
//! Operations that need something to measure return a [`PathError`] when given an
//! empty path.

pub extern crate nodepath_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod aabb;
pub mod error;
pub mod fit;
pub mod insert;
pub mod length;
pub mod sample;

pub use crate::error::PathError;
pub use crate::path::geom;
pub use crate::path::math;
