#![deny(bare_trait_objects)]

//! Parametric 2D path geometry.
//!
//! This meta-crate reexports the following sub-crates for convenience:
//!
//! * **nodepath_geom** - Line segment and cubic bézier primitives: sampling, splitting,
//!   length approximation and bounding boxes.
//! * **nodepath_path** - The `Path` data structure, path building and iteration,
//!   contour decomposition.
//! * **nodepath_algorithms** - Path measurement and sampling, smooth path fitting and
//!   point insertion.
//!
//! Each `nodepath_<name>` crate is reexported as a `<name>` module in `nodepath`. For
//! example:
//!
//! ```ignore
//! extern crate nodepath_path;
//! use nodepath_path::Path;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate nodepath;
//! use nodepath::path::Path;
//! ```
//!
//! # Feature flags
//!
//! Serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Measuring and sampling a path
//!
//! ```
//! use nodepath::algorithms::length::{length, segmented_length};
//! use nodepath::algorithms::sample::points;
//! use nodepath::geom::DEFAULT_CURVE_SAMPLES;
//! use nodepath::math::point;
//! use nodepath::path::Path;
//! use nodepath::path::traits::PathBuilder;
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0));
//! path.line_to(point(100.0, 0.0));
//! path.line_to(point(100.0, 100.0));
//!
//! assert_eq!(length(&path, DEFAULT_CURVE_SAMPLES), Ok(200.0));
//! assert_eq!(segmented_length(&path, DEFAULT_CURVE_SAMPLES), Ok(vec![0.5, 0.5]));
//!
//! for sample in points(&path, 10).unwrap() {
//!     let position = sample.unwrap().position();
//!     assert!(position.x >= 0.0 && position.y >= 0.0);
//! }
//! ```
//!
//! ## Fitting a smooth path and refining it
//!
//! ```
//! use nodepath::algorithms::fit::find_path;
//! use nodepath::algorithms::insert::insert_point;
//!
//! let path = find_path(&[(0.0, 0.0), (40.0, 80.0), (100.0, 20.0)], 0.8);
//! assert_eq!(path.len(), 3);
//!
//! let refined = insert_point(&path, 0.5).unwrap();
//! assert_eq!(refined.len(), 4);
//! ```

pub extern crate nodepath_algorithms;
pub extern crate nodepath_geom;
pub extern crate nodepath_path;

pub use nodepath_algorithms as algorithms;
pub use nodepath_geom as geom;
pub use nodepath_path as path;

pub use crate::path::math;
