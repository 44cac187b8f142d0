//! Approximate path length.
//!
//! Lines and close commands are measured exactly, curves are approximated by summing
//! the chords between evenly spaced samples (see [`curve_length`](crate::geom::curve_length)).

use crate::error::PathError;
use crate::geom::DEFAULT_CURVE_SAMPLES;
use crate::path::measure::{measure_elements, total_length};
use crate::path::Path;

use std::borrow::Cow;

pub use crate::path::measure::SampleType;

/// Computes the length of each segment of a path.
///
/// Returns one value per element, except for the first element which has no
/// preceding position. A close command is measured as a line back to the start of
/// its contour and move-to commands have a length of zero.
///
/// With `SampleType::Normalized` the lengths are divided by the total length of the
/// path. If the total length is zero every normalized length is zero.
///
/// `samples` is the number of chords used to approximate each curve.
pub fn segment_lengths(
    path: &Path,
    sample_type: SampleType,
    samples: u32,
) -> Result<Vec<f64>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    Ok(measure_elements(path.elements(), sample_type, samples))
}

/// Computes the total length of a path.
pub fn length(path: &Path, samples: u32) -> Result<f64, PathError> {
    let lengths = segment_lengths(path, SampleType::Distance, samples)?;

    Ok(total_length(&lengths))
}

/// Computes the length of each segment of a path as a fraction of its total length.
///
/// Equivalent to `segment_lengths(path, SampleType::Normalized, samples)`, but reads the
/// lengths memoized in the path when `samples` is the default sample count.
pub fn segmented_length(path: &Path, samples: u32) -> Result<Vec<f64>, PathError> {
    relative_lengths(path, samples).map(Cow::into_owned)
}

/// Returns the relative segment lengths of a path computed with the default sample
/// count, memoizing them in the path.
pub fn cached_relative_lengths(path: &Path) -> Result<&[f64], PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    Ok(path.relative_lengths())
}

pub(crate) fn relative_lengths(path: &Path, samples: u32) -> Result<Cow<[f64]>, PathError> {
    if samples == DEFAULT_CURVE_SAMPLES {
        return cached_relative_lengths(path).map(Cow::Borrowed);
    }

    segment_lengths(path, SampleType::Normalized, samples).map(Cow::Owned)
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::path::traits::PathBuilder;

#[cfg(test)]
fn corner() -> Path {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(100.0, 0.0));
    path.line_to(point(100.0, 100.0));

    path
}

#[test]
fn corner_length() {
    let path = corner();

    assert_eq!(length(&path, DEFAULT_CURVE_SAMPLES), Ok(200.0));
    assert_eq!(segmented_length(&path, DEFAULT_CURVE_SAMPLES), Ok(vec![0.5, 0.5]));
    assert_eq!(
        segment_lengths(&path, SampleType::Distance, DEFAULT_CURVE_SAMPLES),
        Ok(vec![100.0, 100.0])
    );
}

#[test]
fn empty_paths() {
    let path = Path::new();
    assert_eq!(length(&path, DEFAULT_CURVE_SAMPLES), Err(PathError::Empty));
    assert_eq!(
        segment_lengths(&path, SampleType::Normalized, 4),
        Err(PathError::Empty)
    );
    assert_eq!(cached_relative_lengths(&path), Err(PathError::Empty));

    // A single element has nothing to measure.
    let path = Path::from_points(&[(10.0, 10.0)]);
    let single = length(&path, DEFAULT_CURVE_SAMPLES).unwrap();
    assert_eq!(single, 0.0);
    assert!(single.is_sign_positive());
    assert_eq!(segmented_length(&path, DEFAULT_CURVE_SAMPLES), Ok(Vec::new()));
}

#[test]
fn close_and_move_to() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(30.0, 0.0));
    path.line_to(point(30.0, 40.0));
    path.close();
    path.move_to(point(100.0, 100.0));
    path.line_to(point(110.0, 100.0));

    assert_eq!(
        segment_lengths(&path, SampleType::Distance, DEFAULT_CURVE_SAMPLES),
        Ok(vec![30.0, 40.0, 50.0, 0.0, 10.0])
    );

    assert_eq!(
        segmented_length(&path, DEFAULT_CURVE_SAMPLES),
        Ok(vec![30.0 / 130.0, 40.0 / 130.0, 50.0 / 130.0, 0.0, 10.0 / 130.0])
    );
}

#[test]
fn zero_length_path() {
    let path = Path::from_points(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]);

    assert_eq!(length(&path, DEFAULT_CURVE_SAMPLES), Ok(0.0));
    assert_eq!(segmented_length(&path, DEFAULT_CURVE_SAMPLES), Ok(vec![0.0, 0.0]));
}

#[test]
fn curve_sample_count() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.curve_to(point(0.0, 100.0), point(100.0, 100.0), point(100.0, 0.0));

    let coarse = length(&path, 1).unwrap();
    let fine = length(&path, 100).unwrap();
    let default = length(&path, DEFAULT_CURVE_SAMPLES).unwrap();

    assert_eq!(coarse, 100.0);
    assert!(coarse < default);
    assert!(default <= fine);
}

#[test]
fn relative_lengths_are_memoized() {
    let mut path = corner();
    assert_eq!(path.cached_relative_lengths(), None);

    // Other sample counts bypass the memoized value.
    let relative = segmented_length(&path, 7).unwrap();
    assert_eq!(path.cached_relative_lengths(), None);

    assert_eq!(cached_relative_lengths(&path), Ok(&relative[..]));
    assert_eq!(path.cached_relative_lengths(), Some(&[0.5, 0.5][..]));

    path.line_to(point(0.0, 100.0));
    assert_eq!(path.cached_relative_lengths(), None);
    assert_eq!(
        segmented_length(&path, DEFAULT_CURVE_SAMPLES),
        Ok(vec![1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0])
    );
}
