//! Bounding rectangle computation for paths.

use crate::geom::CubicBezierSegment;
use crate::math::{Box2D, Point};
use crate::path::PathEvent;

/// Computes a conservative axis-aligned rectangle that contains the path.
///
/// Curves are bounded by their control points. This bounding rectangle approximation
/// is faster but less precise than [`bounding_box`](fn.bounding_box.html).
///
/// Returns `None` if there is no event in the path.
pub fn fast_bounding_box<Iter>(path: Iter) -> Option<Box2D>
where
    Iter: IntoIterator<Item = PathEvent>,
{
    accumulate(path, |evt| match *evt {
        PathEvent::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        } => CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        }
        .fast_bounding_box(),
        _ => end_point_box(evt),
    })
}

/// Computes the smallest axis-aligned rectangle that contains the path.
///
/// Returns `None` if there is no event in the path.
pub fn bounding_box<Iter>(path: Iter) -> Option<Box2D>
where
    Iter: IntoIterator<Item = PathEvent>,
{
    accumulate(path, |evt| match *evt {
        PathEvent::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        } => CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        }
        .bounding_box(),
        _ => end_point_box(evt),
    })
}

fn end_point_box(evt: &PathEvent) -> Box2D {
    let p = evt.to();
    Box2D { min: p, max: p }
}

fn accumulate<Iter, F>(path: Iter, event_box: F) -> Option<Box2D>
where
    Iter: IntoIterator<Item = PathEvent>,
    F: Fn(&PathEvent) -> Box2D,
{
    let mut result: Option<(Point, Point)> = None;
    for evt in path {
        let r = event_box(&evt);
        result = Some(match result {
            Some((min, max)) => (Point::min(min, r.min), Point::max(max, r.max)),
            None => (r.min, r.max),
        });
    }

    result.map(|(min, max)| Box2D { min, max })
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::path::{traits::PathBuilder, Path};

#[test]
fn simple_bounding_box() {
    let mut path = Path::new();
    path.move_to(point(-10.0, -3.0));
    path.line_to(point(0.0, -12.0));
    path.line_to(point(5.0, 3.0));
    path.close();

    let expected = Box2D {
        min: point(-10.0, -12.0),
        max: point(5.0, 3.0),
    };
    assert_eq!(fast_bounding_box(&path), Some(expected));
    assert_eq!(bounding_box(&path), Some(expected));

    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.curve_to(point(-1.0, 2.0), point(3.0, -4.0), point(1.0, -1.0));

    assert_eq!(
        fast_bounding_box(path.iter()),
        Some(Box2D {
            min: point(-1.0, -4.0),
            max: point(3.0, 2.0)
        }),
    );

    let tight = bounding_box(&path).unwrap();
    assert!(tight.min.x > -1.0 && tight.max.x < 3.0);
    assert!(tight.min.y > -4.0 && tight.max.y < 2.0);
}

#[test]
fn empty_bounding_box() {
    assert_eq!(bounding_box(&Path::new()), None);
    assert_eq!(fast_bounding_box(&Path::new()), None);

    let single = Path::from_points(&[(4.0, 2.0)]);
    assert_eq!(
        bounding_box(&single),
        Some(Box2D {
            min: point(4.0, 2.0),
            max: point(4.0, 2.0)
        })
    );
}
