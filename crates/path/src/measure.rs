//! Segment measurement shared by the path's length cache and the length algorithms.

use crate::geom::{curve_length, line_length};
use crate::{Iter, PathElement, PathEvent};

/// Whether segment lengths are expressed as distances or as fractions of the total
/// length of the path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SampleType {
    Distance,
    Normalized,
}

/// Measures every segment of a sequence of elements.
///
/// Returns one value per element except the first one, which has no preceding
/// position. Move-tos measure zero and close commands measure the line back to the
/// start of their contour. `samples` is the number of chords used per curve.
///
/// Normalized lengths of a sequence of total length zero are all zero.
pub fn measure_elements(elements: &[PathElement], sample_type: SampleType, samples: u32) -> Vec<f64> {
    let mut lengths: Vec<f64> = Iter::new(elements)
        .skip(1)
        .map(|evt| measure_event(&evt, samples))
        .collect();

    if sample_type == SampleType::Normalized {
        let total = total_length(&lengths);
        if total == 0.0 {
            log::debug!("path of zero length, all relative lengths are zero");
            for length in &mut lengths {
                *length = 0.0;
            }
        } else {
            for length in &mut lengths {
                *length /= total;
            }
        }
    }

    lengths
}

/// Sum of segment lengths, `0.0` when there is no segment.
#[inline]
pub fn total_length(lengths: &[f64]) -> f64 {
    lengths.iter().fold(0.0, |total, length| total + length)
}

fn measure_event(evt: &PathEvent, samples: u32) -> f64 {
    match *evt {
        PathEvent::Begin { .. } => 0.0,
        PathEvent::Line { from, to } | PathEvent::Close { from, to } => line_length(from, to),
        PathEvent::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        } => curve_length(from, ctrl1, ctrl2, to, samples),
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn measure_lines_and_close() {
    let elements = [
        PathElement::MoveTo(point(0.0, 0.0)),
        PathElement::LineTo(point(30.0, 0.0)),
        PathElement::LineTo(point(30.0, 40.0)),
        PathElement::Close,
        PathElement::MoveTo(point(100.0, 100.0)),
    ];

    assert_eq!(
        measure_elements(&elements, SampleType::Distance, 20),
        vec![30.0, 40.0, 50.0, 0.0]
    );
    assert_eq!(
        measure_elements(&elements, SampleType::Normalized, 20),
        vec![0.25, 1.0 / 3.0, 50.0 / 120.0, 0.0]
    );
}

#[test]
fn total_of_nothing_is_positive_zero() {
    let total = total_length(&[]);
    assert_eq!(total, 0.0);
    assert!(total.is_sign_positive());

    let single = [PathElement::MoveTo(point(1.0, 1.0))];
    assert!(measure_elements(&single, SampleType::Normalized, 20).is_empty());
}
