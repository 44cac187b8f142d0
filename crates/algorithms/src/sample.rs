//! Sample positions along a path.
//!
//! Positions are addressed with a global parameter `t` between `0.0` (the start of the
//! path) and `1.0` (its end), proportional to the approximate arc length of the path.
//!
//! Finding the segment containing `t` requires the relative length of every segment.
//! When sampling many positions, compute them once with
//! [`segmented_length`](crate::length::segmented_length) (or let the path memoize them,
//! which is what happens when `None` is passed) instead of measuring the path for each
//! sample.
//!
//! # Example
//!
//! ```
//! use nodepath_algorithms::sample::{point, points};
//! use nodepath_algorithms::path::Path;
//! use nodepath_algorithms::math::point as pt;
//!
//! let path = Path::from_points(&[(0.0, 0.0), (100.0, 0.0)]);
//!
//! assert_eq!(point(&path, 0.1, None).unwrap().position(), pt(10.0, 0.0));
//!
//! let xs: Vec<f64> = points(&path, 3)
//!     .unwrap()
//!     .map(|sample| sample.unwrap().position().x)
//!     .collect();
//! assert_eq!(xs, vec![0.0, 50.0, 100.0]);
//! ```

use crate::error::PathError;
use crate::geom::{curve_point, line_point};
use crate::length::cached_relative_lengths;
use crate::math::Point;
use crate::path::{Path, PathCommand, PathElement, PathEvent};

use std::iter::FusedIterator;

/// Default number of samples produced by [`points`].
pub const DEFAULT_POINT_AMOUNT: usize = 100;

/// The segment of a path containing a given global position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Location {
    /// Index of the element drawing the segment.
    ///
    /// The segment starts at the end of the previous element, so this is also the
    /// index of the segment's relative length plus one.
    pub index: usize,
    /// Position within the segment, between `0.0` and `1.0`.
    pub t: f64,
    /// The start of the contour the segment belongs to.
    pub contour_start: Point,
    /// The resolved geometry of the segment.
    pub event: PathEvent,
}

impl Location {
    /// Evaluates the located segment at the local position.
    ///
    /// Fails with `PathError::MalformedCommand` if the location holds a `Begin` event,
    /// which draws nothing.
    pub fn sample(&self) -> Result<PathSample, PathError> {
        Ok(match self.event {
            PathEvent::Line { from, to } | PathEvent::Close { from, to } => PathSample::Line {
                position: line_point(self.t, from, to),
            },
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let (position, ctrl1, ctrl2) = curve_point(self.t, from, ctrl1, ctrl2, to);
                PathSample::Curve {
                    position,
                    ctrl1,
                    ctrl2,
                }
            }
            PathEvent::Begin { .. } => return Err(self.not_drawn()),
        })
    }

    /// The error reported when the located event is the start of a contour.
    pub(crate) fn not_drawn(&self) -> PathError {
        PathError::MalformedCommand {
            index: self.index,
            command: PathCommand::MoveTo,
        }
    }
}

/// A position sampled on a path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathSample {
    /// A position on a line or close segment.
    Line { position: Point },
    /// A position on a curve, along with the tangent handles at that position.
    ///
    /// `ctrl1` is the handle pointing backward along the curve and `ctrl2` the one
    /// pointing forward.
    Curve {
        position: Point,
        ctrl1: Point,
        ctrl2: Point,
    },
}

impl PathSample {
    #[inline]
    pub fn position(&self) -> Point {
        match *self {
            PathSample::Line { position } | PathSample::Curve { position, .. } => position,
        }
    }

    /// Converts the sample into the element that would draw up to it.
    pub fn to_element(&self) -> PathElement {
        match *self {
            PathSample::Line { position } => PathElement::LineTo(position),
            PathSample::Curve {
                position,
                ctrl1,
                ctrl2,
            } => PathElement::CurveTo {
                ctrl1,
                ctrl2,
                to: position,
            },
        }
    }
}

/// Finds the segment containing the global position `t`.
///
/// `segments` are the relative segment lengths of the path as returned by
/// [`segmented_length`](crate::length::segmented_length). If `None`, the lengths
/// memoized in the path are used (and computed if needed).
///
/// Move-to commands are skipped. If `t` runs past the end of the path, it is
/// attributed to the last drawn segment, so values slightly above `1.0` caused by
/// rounding errors still produce the end of the path.
///
/// Fails with `PathError::Empty` if the path has less than two elements and with
/// `PathError::MalformedCommand` if none of its elements draws anything.
pub fn locate(path: &Path, t: f64, segments: Option<&[f64]>) -> Result<Location, PathError> {
    if path.len() < 2 {
        return Err(PathError::Empty);
    }

    let segments = match segments {
        Some(segments) => segments,
        None => cached_relative_lengths(path)?,
    };

    if segments.is_empty() {
        return Err(PathError::Empty);
    }

    let elements = path.elements();
    let count = segments.len().min(elements.len() - 1);
    let last = match (1..=count).rev().find(|&idx| elements[idx].is_drawn()) {
        Some(idx) => idx,
        None => {
            return Err(PathError::MalformedCommand {
                index: count,
                command: elements[count].command(),
            })
        }
    };

    let mut t = t;
    let mut events = path.iter();
    // Skip the start of the first contour.
    events.next();

    let mut index = 0;
    while let Some(evt) = events.next() {
        index += 1;
        if !evt.is_edge() {
            continue;
        }

        let length = segments[index - 1];
        if t <= length || index == last {
            let local_t = if length == 0.0 {
                log::debug!("locating on segment {} of zero length", index);
                t
            } else {
                t / length
            };

            return Ok(Location {
                index,
                t: local_t,
                contour_start: events.contour_start(),
                event: evt,
            });
        }

        t -= length;
    }

    Err(PathError::MalformedCommand {
        index: last,
        command: elements[last].command(),
    })
}

/// Returns the position at the global position `t` on the path.
///
/// See [`locate`] for the meaning of `segments` and the failure cases.
pub fn point(path: &Path, t: f64, segments: Option<&[f64]>) -> Result<PathSample, PathError> {
    locate(path, t, segments)?.sample()
}

/// Returns an iterator over `amount` positions evenly spread (in terms of arc length)
/// along the path.
///
/// Both ends of the path are included: the samples are at `t = i / (amount - 1)`.
/// A single sample is at the start of the path.
///
/// The path is validated when this function is called. Each sample is computed when
/// the iterator advances and a cloned iterator computes its samples again.
pub fn points(path: &Path, amount: usize) -> Result<Points, PathError> {
    let segments = cached_relative_lengths(path)?;
    locate(path, 0.0, Some(segments))?;

    Ok(Points {
        path,
        segments,
        index: 0,
        amount,
    })
}

/// An iterator of evenly spaced samples along a path, see [`points`].
#[derive(Clone)]
pub struct Points<'l> {
    path: &'l Path,
    segments: &'l [f64],
    index: usize,
    amount: usize,
}

impl<'l> Points<'l> {
    fn t(&self, index: usize) -> f64 {
        if self.amount > 1 {
            index as f64 / (self.amount - 1) as f64
        } else {
            0.0
        }
    }
}

impl<'l> Iterator for Points<'l> {
    type Item = Result<PathSample, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.amount {
            return None;
        }

        let t = self.t(self.index);
        self.index += 1;

        Some(point(self.path, t, Some(self.segments)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.amount - self.index;
        (remaining, Some(remaining))
    }
}

impl<'l> ExactSizeIterator for Points<'l> {}
impl<'l> FusedIterator for Points<'l> {}

#[cfg(test)]
use crate::math::point as pt;
#[cfg(test)]
use crate::path::traits::PathBuilder;

#[cfg(test)]
fn line() -> Path {
    Path::from_points(&[(0.0, 0.0), (100.0, 0.0)])
}

#[cfg(test)]
fn approx_eq(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn locate_on_a_line() {
    let path = line();

    let start = locate(&path, 0.0, None).unwrap();
    assert_eq!(start.index, 1);
    assert_eq!(start.t, 0.0);
    assert_eq!(start.contour_start, pt(0.0, 0.0));

    let end = locate(&path, 1.0, None).unwrap();
    assert_eq!(end.index, 1);
    assert_eq!(end.t, 1.0);
}

#[test]
fn locate_empty_paths() {
    assert_eq!(locate(&Path::new(), 0.0, None), Err(PathError::Empty));

    let single = Path::from_points(&[(0.0, 0.0)]);
    assert_eq!(locate(&single, 0.0, None), Err(PathError::Empty));
    assert_eq!(point(&single, 0.5, None), Err(PathError::Empty));

    let mut moves = Path::new();
    moves.move_to(pt(0.0, 0.0));
    moves.move_to(pt(10.0, 0.0));
    assert_eq!(
        locate(&moves, 0.5, None),
        Err(PathError::MalformedCommand {
            index: 1,
            command: crate::path::PathCommand::MoveTo
        })
    );

    assert_eq!(locate(&line(), 0.5, Some(&[][..])), Err(PathError::Empty));
}

#[test]
fn sample_a_line() {
    let path = line();

    assert_eq!(
        point(&path, 0.0, None),
        Ok(PathSample::Line {
            position: pt(0.0, 0.0)
        })
    );
    assert_eq!(point(&path, 0.1, None).unwrap().position(), pt(10.0, 0.0));
    assert_eq!(point(&path, 1.0, None).unwrap().position(), pt(100.0, 0.0));
}

#[test]
fn sample_across_segments() {
    let path = Path::from_points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

    let location = locate(&path, 0.75, None).unwrap();
    assert_eq!(location.index, 2);
    assert_eq!(location.t, 0.5);
    assert_eq!(location.sample().unwrap().position(), pt(100.0, 50.0));

    // Explicit lengths give the same result as the memoized ones.
    let segments = [0.5, 0.5];
    assert_eq!(point(&path, 0.75, Some(&segments[..])), point(&path, 0.75, None));
}

#[test]
fn sample_close_segment() {
    let mut path = Path::new();
    path.move_to(pt(0.0, 0.0));
    path.line_to(pt(30.0, 0.0));
    path.line_to(pt(30.0, 40.0));
    path.close();

    // The close segment runs from (30, 40) back to the start of the contour.
    let location = locate(&path, 1.0 - 25.0 / 120.0, None).unwrap();
    assert_eq!(location.index, 3);
    assert_eq!(location.contour_start, pt(0.0, 0.0));
    assert!(approx_eq(location.sample().unwrap().position(), pt(15.0, 20.0)));
    assert!(approx_eq(point(&path, 1.0, None).unwrap().position(), pt(0.0, 0.0)));
}

#[test]
fn skip_move_to() {
    let mut path = Path::new();
    path.move_to(pt(0.0, 0.0));
    path.line_to(pt(10.0, 0.0));
    path.move_to(pt(50.0, 50.0));
    path.line_to(pt(60.0, 50.0));
    path.close();
    path.move_to(pt(200.0, 200.0));

    // Lengths: 10, 0, 10, 10, 0
    let location = locate(&path, 1.0 / 3.0, None).unwrap();
    assert_eq!(location.index, 1);
    assert_eq!(location.t, 1.0);

    let location = locate(&path, 0.5, None).unwrap();
    assert_eq!(location.index, 3);
    assert!((location.t - 0.5).abs() < 1e-9);
    assert_eq!(location.contour_start, pt(50.0, 50.0));
    assert!(approx_eq(location.sample().unwrap().position(), pt(55.0, 50.0)));

    // The trailing move-to is never located.
    let end = locate(&path, 1.0, None).unwrap();
    assert_eq!(end.index, 4);
    assert!(approx_eq(end.sample().unwrap().position(), pt(50.0, 50.0)));
}

#[test]
fn zero_length_segments() {
    let path = Path::from_points(&[(5.0, 5.0), (5.0, 5.0)]);

    let location = locate(&path, 0.3, None).unwrap();
    assert_eq!(location.index, 1);
    assert_eq!(location.t, 0.3);
    assert_eq!(location.sample().unwrap().position(), pt(5.0, 5.0));
}

#[test]
fn sample_a_curve() {
    let mut path = Path::new();
    path.move_to(pt(0.0, 100.0));
    path.curve_to(pt(0.0, 50.0), pt(100.0, 50.0), pt(100.0, 100.0));

    match point(&path, 0.5, None).unwrap() {
        PathSample::Curve {
            position,
            ctrl1,
            ctrl2,
        } => {
            // The curve is symmetric.
            assert!(approx_eq(position, pt(50.0, 62.5)));
            assert!(approx_eq(ctrl1, pt(25.0, 62.5)));
            assert!(approx_eq(ctrl2, pt(75.0, 62.5)));
        }
        sample => panic!("unexpected sample {:?}", sample),
    }

    let end = point(&path, 1.0, None).unwrap();
    assert_eq!(
        end.to_element().command(),
        crate::path::PathCommand::CurveTo
    );
    assert!(approx_eq(end.position(), pt(100.0, 100.0)));
}

#[test]
fn evenly_spaced_points() {
    let path = line();

    let xs: Vec<f64> = points(&path, 4)
        .unwrap()
        .map(|sample| sample.unwrap().position().x)
        .collect();
    assert_eq!(xs.len(), 4);
    assert_eq!(xs[0], 0.0);
    assert!((xs[1] - 100.0 / 3.0).abs() < 1e-9);
    assert!((xs[2] - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(xs[3], 100.0);

    assert_eq!(points(&path, DEFAULT_POINT_AMOUNT).unwrap().len(), 100);
}

#[test]
fn single_and_no_points() {
    let path = line();

    let samples: Vec<PathSample> = points(&path, 1).unwrap().map(Result::unwrap).collect();
    assert_eq!(
        samples,
        vec![PathSample::Line {
            position: pt(0.0, 0.0)
        }]
    );

    assert_eq!(points(&path, 0).unwrap().count(), 0);
}

#[test]
fn points_are_restartable() {
    let path = line();
    let mut iter = points(&path, 5).unwrap();
    iter.next();

    let restarted = iter.clone();
    let a: Vec<_> = iter.collect();
    let b: Vec<_> = restarted.collect();
    assert_eq!(a, b);
    assert_eq!(a.len(), 4);
}

#[test]
fn points_fail_up_front() {
    assert!(points(&Path::new(), 10).is_err());
    assert!(points(&Path::from_points(&[(1.0, 1.0)]), 10).is_err());
}

#[test]
fn begin_events_are_not_sampled() {
    let path = line();
    let mut location = locate(&path, 0.5, None).unwrap();
    assert!(location.sample().is_ok());

    location.event = PathEvent::Begin { at: pt(0.0, 0.0) };
    assert_eq!(
        location.sample(),
        Err(PathError::MalformedCommand {
            index: 1,
            command: PathCommand::MoveTo,
        })
    );
}

#[test]
fn memoized_lengths_follow_mutations() {
    let mut path = Path::from_points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    assert_eq!(point(&path, 0.5, None).unwrap().position(), pt(100.0, 0.0));

    path.replace_elements(vec![
        PathElement::MoveTo(pt(0.0, 0.0)),
        PathElement::LineTo(pt(100.0, 0.0)),
        PathElement::LineTo(pt(100.0, 300.0)),
    ]);

    let fresh = Path::from_elements(path.elements().to_vec());
    let expected = point(&fresh, 0.5, None).unwrap().position();
    assert!(approx_eq(expected, pt(100.0, 100.0)));
    assert_eq!(point(&path, 0.5, None).unwrap().position(), expected);
}
