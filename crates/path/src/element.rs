use crate::geom::traits::Transformation;
use crate::math::Point;

/// The command of a [`PathElement`] without its geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    MoveTo,
    LineTo,
    CurveTo,
    Close,
}

/// One command of a path along with its geometry.
///
/// - `MoveTo` starts a new contour at a position.
/// - `LineTo` draws a straight line from the current position.
/// - `CurveTo` draws a cubic bézier curve from the current position, ending at `to`.
/// - `Close` draws a line back to the start of the current contour.
///
/// Equality is structural: two elements are equal if they have the same command,
/// anchor and control points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathElement {
    #[inline]
    pub fn command(&self) -> PathCommand {
        match self {
            PathElement::MoveTo(..) => PathCommand::MoveTo,
            PathElement::LineTo(..) => PathCommand::LineTo,
            PathElement::CurveTo { .. } => PathCommand::CurveTo,
            PathElement::Close => PathCommand::Close,
        }
    }

    /// The anchor of the element, `None` for `Close`.
    #[inline]
    pub fn point(&self) -> Option<Point> {
        match *self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => Some(p),
            PathElement::CurveTo { to, .. } => Some(to),
            PathElement::Close => None,
        }
    }

    /// The first control point of the element.
    ///
    /// Move-to and line-to elements have degenerate control points equal to their anchor.
    #[inline]
    pub fn ctrl1(&self) -> Option<Point> {
        match *self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => Some(p),
            PathElement::CurveTo { ctrl1, .. } => Some(ctrl1),
            PathElement::Close => None,
        }
    }

    /// The second control point of the element.
    ///
    /// Move-to and line-to elements have degenerate control points equal to their anchor.
    #[inline]
    pub fn ctrl2(&self) -> Option<Point> {
        match *self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => Some(p),
            PathElement::CurveTo { ctrl2, .. } => Some(ctrl2),
            PathElement::Close => None,
        }
    }

    /// Whether this element draws something (as opposed to a move-to).
    #[inline]
    pub fn is_drawn(&self) -> bool {
        match self {
            PathElement::MoveTo(..) => false,
            _ => true,
        }
    }

    pub fn transformed<T: Transformation<f64>>(&self, transform: &T) -> Self {
        match *self {
            PathElement::MoveTo(p) => PathElement::MoveTo(transform.transform_point(p)),
            PathElement::LineTo(p) => PathElement::LineTo(transform.transform_point(p)),
            PathElement::CurveTo { ctrl1, ctrl2, to } => PathElement::CurveTo {
                ctrl1: transform.transform_point(ctrl1),
                ctrl2: transform.transform_point(ctrl2),
                to: transform.transform_point(to),
            },
            PathElement::Close => PathElement::Close,
        }
    }
}

#[test]
fn uniform_accessors() {
    use crate::math::point;

    let m = PathElement::MoveTo(point(1.0, 2.0));
    assert_eq!(m.command(), PathCommand::MoveTo);
    assert_eq!(m.point(), Some(point(1.0, 2.0)));
    assert_eq!(m.ctrl1(), m.point());
    assert_eq!(m.ctrl2(), m.point());
    assert!(!m.is_drawn());

    let c = PathElement::CurveTo {
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 2.0),
        to: point(3.0, 3.0),
    };
    assert_eq!(c.command(), PathCommand::CurveTo);
    assert_eq!(c.point(), Some(point(3.0, 3.0)));
    assert_eq!(c.ctrl1(), Some(point(1.0, 1.0)));
    assert_eq!(c.ctrl2(), Some(point(2.0, 2.0)));
    assert!(c.is_drawn());

    assert_eq!(PathElement::Close.point(), None);
    assert_eq!(PathElement::Close.command(), PathCommand::Close);
    assert!(PathElement::Close.is_drawn());
}

#[test]
fn structural_equality() {
    use crate::math::point;

    assert_eq!(
        PathElement::LineTo(point(1.0, 2.0)),
        PathElement::LineTo(point(1.0, 2.0))
    );
    assert_ne!(
        PathElement::LineTo(point(1.0, 2.0)),
        PathElement::MoveTo(point(1.0, 2.0))
    );
    assert_ne!(
        PathElement::CurveTo {
            ctrl1: point(0.0, 0.0),
            ctrl2: point(1.0, 1.0),
            to: point(2.0, 2.0),
        },
        PathElement::CurveTo {
            ctrl1: point(0.0, 0.5),
            ctrl2: point(1.0, 1.0),
            to: point(2.0, 2.0),
        }
    );
}

#[test]
fn transformed_elements() {
    use crate::math::{point, Transform};

    let t = Transform::translation(10.0, 20.0);
    assert_eq!(
        PathElement::LineTo(point(1.0, 2.0)).transformed(&t),
        PathElement::LineTo(point(11.0, 22.0))
    );
    assert_eq!(PathElement::Close.transformed(&t), PathElement::Close);
}
