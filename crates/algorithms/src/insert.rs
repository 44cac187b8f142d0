//! Insert on-curve points in paths without changing their shape.

use crate::error::PathError;
use crate::geom::{curve_point_extended, line_point};
use crate::path::{Path, PathElement, PathEvent};
use crate::sample::locate;

/// Returns a copy of the path with an extra anchor at the global position `t`.
///
/// The segment containing `t` is split in two: lines and close commands are split at
/// the interpolated position, curves are subdivided so that the two resulting curves
/// trace exactly the same shape as the original one. All other elements are copied
/// unchanged.
///
/// Fails under the same conditions as [`locate`](crate::sample::locate).
///
/// # Example
///
/// ```
/// use nodepath_algorithms::insert::insert_point;
/// use nodepath_algorithms::path::{Path, PathElement};
/// use nodepath_algorithms::math::point;
///
/// let path = Path::from_points(&[(0.0, 0.0), (100.0, 50.0)]);
/// let path = insert_point(&path, 0.5).unwrap();
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[1], PathElement::LineTo(point(50.0, 25.0)));
/// ```
pub fn insert_point(path: &Path, t: f64) -> Result<Path, PathError> {
    let location = locate(path, t, None)?;

    let replacement = match location.event {
        PathEvent::Line { from, to } => [
            PathElement::LineTo(line_point(location.t, from, to)),
            PathElement::LineTo(to),
        ],
        PathEvent::Close { from, to } => [
            PathElement::LineTo(line_point(location.t, from, to)),
            PathElement::Close,
        ],
        PathEvent::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        } => {
            let split = curve_point_extended(location.t, from, ctrl1, ctrl2, to);
            [
                PathElement::CurveTo {
                    ctrl1: split.handle1,
                    ctrl2: split.ctrl1,
                    to: split.position,
                },
                PathElement::CurveTo {
                    ctrl1: split.ctrl2,
                    ctrl2: split.handle2,
                    to,
                },
            ]
        }
        PathEvent::Begin { .. } => return Err(location.not_drawn()),
    };

    let elements = path.elements();
    let mut result = Path::with_capacity(elements.len() + 1);
    result.extend(elements[..location.index].iter().copied());
    result.extend(replacement.iter().copied());
    result.extend(elements[location.index + 1..].iter().copied());

    Ok(result)
}

/// Inserts an anchor at the global position `t`, replacing the elements of the path.
///
/// See [`insert_point`]. The path is left untouched if this fails.
pub fn insert_point_in_place(path: &mut Path, t: f64) -> Result<(), PathError> {
    let elements = insert_point(path, t)?.into_elements();
    path.replace_elements(elements);

    Ok(())
}

#[cfg(test)]
use crate::math::{point, Point};
#[cfg(test)]
use crate::path::traits::PathBuilder;
#[cfg(test)]
use crate::sample::point as sample_point;

#[cfg(test)]
fn approx_eq(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn split_line() {
    let path = Path::from_points(&[(0.0, 0.0), (100.0, 50.0)]);
    let result = insert_point(&path, 0.5).unwrap();

    assert_eq!(
        result.elements(),
        &[
            PathElement::MoveTo(point(0.0, 0.0)),
            PathElement::LineTo(point(50.0, 25.0)),
            PathElement::LineTo(point(100.0, 50.0)),
        ]
    );
}

#[test]
fn split_curve() {
    let mut path = Path::new();
    path.move_to(point(0.0, 100.0));
    path.curve_to(point(0.0, 50.0), point(100.0, 50.0), point(100.0, 100.0));

    let result = insert_point(&path, 0.5).unwrap();
    assert_eq!(result.len(), 3);

    match (result[1], result[2]) {
        (
            PathElement::CurveTo {
                ctrl1: h1,
                ctrl2: c1,
                to: p,
            },
            PathElement::CurveTo {
                ctrl1: c2,
                ctrl2: h2,
                to,
            },
        ) => {
            assert!(approx_eq(h1, point(0.0, 75.0)));
            assert!(approx_eq(c1, point(25.0, 62.5)));
            assert!(approx_eq(p, point(50.0, 62.5)));
            assert!(approx_eq(c2, point(75.0, 62.5)));
            assert!(approx_eq(h2, point(100.0, 75.0)));
            assert_eq!(to, point(100.0, 100.0));
        }
        elements => panic!("unexpected elements {:?}", elements),
    }
}

#[test]
fn split_close() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(30.0, 0.0));
    path.line_to(point(30.0, 40.0));
    path.close();

    // The middle of the close segment.
    let result = insert_point(&path, 1.0 - 25.0 / 120.0).unwrap();
    assert_eq!(result.len(), 5);
    assert_eq!(&result.elements()[..3], &path.elements()[..3]);
    assert!(approx_eq(result[3].point().unwrap(), point(15.0, 20.0)));
    assert_eq!(result[4], PathElement::Close);
}

#[test]
fn other_elements_are_copied() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(10.0, 0.0));
    path.move_to(point(50.0, 0.0));
    path.line_to(point(60.0, 0.0));

    let result = insert_point(&path, 0.75).unwrap();
    assert_eq!(&result.elements()[..3], &path.elements()[..3]);
    assert_eq!(result.len(), 5);
    assert_eq!(result[3], PathElement::LineTo(point(55.0, 0.0)));
    assert_eq!(result[4], PathElement::LineTo(point(60.0, 0.0)));
}

#[test]
fn shape_is_preserved() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.curve_to(point(0.0, 100.0), point(100.0, 100.0), point(100.0, 0.0));
    path.line_to(point(200.0, 0.0));

    let result = insert_point(&path, 0.3).unwrap();
    assert_eq!(result.len(), 4);

    // The new anchor lies on the original path.
    let expected = sample_point(&path, 0.3, None).unwrap().position();
    assert!(approx_eq(result[1].point().unwrap(), expected));

    // Both halves trace the original curve.
    let original = crate::geom::CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };
    let location = locate(&path, 0.3, None).unwrap();
    let (before, after) = original.split(location.t);
    assert!(approx_eq(result[1].ctrl1().unwrap(), before.ctrl1));
    assert!(approx_eq(result[1].ctrl2().unwrap(), before.ctrl2));
    assert!(approx_eq(result[2].ctrl1().unwrap(), after.ctrl1));
    assert!(approx_eq(result[2].ctrl2().unwrap(), after.ctrl2));
}

#[test]
fn in_place() {
    let mut path = Path::from_points(&[(0.0, 0.0), (100.0, 0.0)]);
    crate::length::cached_relative_lengths(&path).unwrap();

    insert_point_in_place(&mut path, 0.25).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[1], PathElement::LineTo(point(25.0, 0.0)));
    assert_eq!(path.cached_relative_lengths(), None);

    let mut single = Path::from_points(&[(0.0, 0.0)]);
    assert_eq!(insert_point_in_place(&mut single, 0.5), Err(PathError::Empty));
    assert_eq!(single.len(), 1);
}

#[test]
fn empty_paths() {
    assert_eq!(insert_point(&Path::new(), 0.1), Err(PathError::Empty));

    let mut moves = Path::new();
    moves.move_to(point(0.0, 0.0));
    moves.move_to(point(0.0, 0.0));
    assert!(insert_point(&moves, 0.2).is_err());
}
