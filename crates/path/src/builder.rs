//! Path building utilities.
//!
//! ## `PathBuilder`
//!
//! [PathBuilder](trait.PathBuilder.html) is the incremental interface used to build
//! paths. Implementors only provide the four basic commands (`move_to`, `line_to`,
//! `curve_to` and `close`) and automatically get helpers to add common shapes.
//!
//! Unlike SVG, a `line_to` or `curve_to` does not require a preceding `move_to`: when
//! a path does not start with a `move_to`, its first element establishes the start of
//! the first contour.
//!
//! ## Examples
//!
//! ```
//! use nodepath_path::Path;
//! use nodepath_path::math::{point, Box2D};
//! use nodepath_path::builder::{ArrowStyle, PathBuilder};
//!
//! let mut path = Path::new();
//!
//! path.move_to(point(0.0, 0.0));
//! path.line_to(point(1.0, 0.0));
//! path.curve_to(point(2.0, 0.0), point(2.0, 1.0), point(1.0, 1.0));
//! path.close();
//!
//! path.add_rectangle(&Box2D::new(point(10.0, 10.0), point(20.0, 15.0)));
//! path.add_star(point(50.0, 50.0), 5, 20.0, 10.0);
//! path.add_arrow(point(100.0, 0.0), 30.0, ArrowStyle::Normal);
//!
//! assert_eq!(path.contours().count(), 4);
//! ```

use crate::math::{point, Box2D, Point};
use crate::{PathElement, Position};

use std::convert::TryFrom;

/// The shape of the arrows produced by `PathBuilder::add_arrow`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ArrowStyle {
    /// An arrow pointing right, its tip at the given position.
    Normal,
    /// An arrow pointing up and right at 45 degrees, its tip at the given position.
    FortyFive,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle::Normal
    }
}

/// The magic number used to approximate a quarter of a circle with a cubic bézier curve.
const KAPPA: f64 = 0.5522847498;

/// The base path building interface.
pub trait PathBuilder {
    /// Starts a new contour at a given position.
    fn move_to(&mut self, to: Point);

    /// Adds a line segment to the current contour.
    fn line_to(&mut self, to: Point);

    /// Adds a cubic bézier curve to the current contour.
    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Draws a line back to the start of the current contour.
    ///
    /// This does not start a new contour.
    fn close(&mut self);

    /// Hints at the builder that a certain number of elements will be added.
    ///
    /// The Builder implementation may use this information to pre-allocate
    /// memory as an optimization.
    fn reserve(&mut self, _elements: usize) {}

    /// Applies the provided path element.
    fn path_element(&mut self, element: PathElement) {
        match element {
            PathElement::MoveTo(to) => self.move_to(to),
            PathElement::LineTo(to) => self.line_to(to),
            PathElement::CurveTo { ctrl1, ctrl2, to } => self.curve_to(ctrl1, ctrl2, to),
            PathElement::Close => self.close(),
        }
    }

    /// Adds elements from an iterator.
    fn extend_elements<Elements>(&mut self, elements: Elements)
    where
        Elements: IntoIterator<Item = PathElement>,
    {
        for element in elements {
            self.path_element(element);
        }
    }

    /// Adds a contour going through each of the points in order.
    ///
    /// Nothing is added if `points` is empty.
    fn add_polyline<Points>(&mut self, points: Points, closed: bool)
    where
        Points: IntoIterator,
        Points::Item: Position,
        Self: Sized,
    {
        let mut points = points.into_iter();
        let first = match points.next() {
            Some(p) => p.position(),
            None => return,
        };

        self.reserve(points.size_hint().0 + 2);
        self.move_to(first);
        for p in points {
            self.line_to(p.position());
        }

        if closed {
            self.close();
        }
    }

    /// Adds a contour containing a single line segment.
    fn add_line(&mut self, from: Point, to: Point) {
        self.move_to(from);
        self.line_to(to);
    }

    /// Adds a closed contour following the sides of a rectangle, starting at its
    /// minimum corner.
    fn add_rectangle(&mut self, rect: &Box2D) {
        let (x, y) = (rect.min.x, rect.min.y);
        let (w, h) = (rect.width(), rect.height());

        self.reserve(5);
        self.move_to(point(x, y));
        self.line_to(point(x + w, y));
        self.line_to(point(x + w, y + h));
        self.line_to(point(x, y + h));
        self.close();
    }

    /// Adds a closed contour containing a rectangle with rounded corners.
    ///
    /// The radius of the corners is `roundness` times the smallest side of the
    /// rectangle. A `roundness` of zero produces a plain rectangle.
    fn add_rounded_rectangle(&mut self, rect: &Box2D, roundness: f64) {
        if roundness == 0.0 {
            self.add_rectangle(rect);
            return;
        }

        let (x, y) = (rect.min.x, rect.min.y);
        let (w, h) = (rect.width(), rect.height());
        let c = (w * roundness).min(h * roundness);

        self.reserve(9);
        self.move_to(point(x, y + c));
        self.curve_to(point(x, y), point(x, y), point(x + c, y));
        self.line_to(point(x + w - c, y));
        self.curve_to(point(x + w, y), point(x + w, y), point(x + w, y + c));
        self.line_to(point(x + w, y + h - c));
        self.curve_to(point(x + w, y + h), point(x + w, y + h), point(x + w - c, y + h));
        self.line_to(point(x + c, y + h));
        self.curve_to(point(x, y + h), point(x, y + h), point(x, y + h - c));
        self.close();
    }

    /// Adds a contour containing an ellipse inscribed in a rectangle, approximated
    /// with four cubic bézier curves.
    ///
    /// The contour starts and ends at the middle of the bottom side and is not closed
    /// with a `close` command since the last curve already ends at the start.
    fn add_oval(&mut self, rect: &Box2D) {
        let (x, y) = (rect.min.x, rect.min.y);
        let (w, h) = (rect.width(), rect.height());
        let (hw, hh) = (w * 0.5, h * 0.5);
        let hd = hw * KAPPA;
        let vd = hh * KAPPA;

        self.reserve(5);
        self.move_to(point(x + hw, y + h));
        self.curve_to(point(x + hw - hd, y + h), point(x, y + hh + vd), point(x, y + hh));
        self.curve_to(point(x, y + hh - vd), point(x + hw - hd, y), point(x + hw, y));
        self.curve_to(point(x + hw + hd, y), point(x + w, y + hh - vd), point(x + w, y + hh));
        self.curve_to(point(x + w, y + hh + vd), point(x + hw + hd, y + h), point(x + hw, y + h));
    }

    /// Adds a closed contour containing a star with `points` branches alternating
    /// between the outer and the inner radius.
    fn add_star(&mut self, center: Point, points: u32, outer: f64, inner: f64) {
        // Twice a u32 does not always fit in a u32.
        let vertices = 2 * u64::from(points);

        self.reserve(usize::try_from(vertices + 1).unwrap_or(0));
        self.move_to(point(center.x, center.y + outer));
        for vertex in 1..vertices {
            self.line_to(star_vertex(center, vertex, points, outer, inner));
        }
        self.close();
    }

    /// Adds a contour containing an arrow whose tip is at `tip`.
    fn add_arrow(&mut self, tip: Point, width: f64, style: ArrowStyle) {
        let (x, y) = (tip.x, tip.y);
        match style {
            ArrowStyle::Normal => {
                let head = width * 0.4;
                let tail = width * 0.2;

                self.reserve(9);
                self.move_to(point(x, y));
                self.line_to(point(x - head, y + head));
                self.line_to(point(x - head, y + tail));
                self.line_to(point(x - width, y + tail));
                self.line_to(point(x - width, y - tail));
                self.line_to(point(x - head, y - tail));
                self.line_to(point(x - head, y - head));
                self.line_to(point(x, y));
                self.close();
            }
            ArrowStyle::FortyFive => {
                let head = 0.3;
                let tail = 1.3;

                self.reserve(10);
                self.move_to(point(x, y));
                self.line_to(point(x, y + width * (1.0 - head)));
                self.line_to(point(x - width * head, y + width));
                self.line_to(point(x - width * head, y + width * tail * 0.4));
                self.line_to(point(x - width * tail * 0.6, y + width));
                self.line_to(point(x - width, y + width * tail * 0.6));
                self.line_to(point(x - width * tail * 0.4, y + width * head));
                self.line_to(point(x - width, y + width * head));
                self.line_to(point(x - width * (1.0 - head), y));
                self.line_to(point(x, y));
            }
        }
    }
}

/// Position of the `vertex`-th corner of a star, counting from the top outer corner.
///
/// Odd vertices are on the inner radius.
fn star_vertex(center: Point, vertex: u64, points: u32, outer: f64, inner: f64) -> Point {
    use std::f64::consts::PI;

    let angle = vertex as f64 * PI / f64::from(points);
    let radius = if vertex % 2 == 1 { inner } else { outer };
    let (sin, cos) = angle.sin_cos();

    point(center.x + radius * sin, center.y + radius * cos)
}

#[cfg(test)]
use crate::{Path, PathCommand};

#[cfg(test)]
fn commands(path: &Path) -> Vec<PathCommand> {
    path.elements().iter().map(|e| e.command()).collect()
}

#[test]
fn rectangle() {
    let mut path = Path::new();
    path.add_rectangle(&Box2D::new(point(10.0, 20.0), point(40.0, 60.0)));

    assert_eq!(
        path.elements(),
        &[
            PathElement::MoveTo(point(10.0, 20.0)),
            PathElement::LineTo(point(40.0, 20.0)),
            PathElement::LineTo(point(40.0, 60.0)),
            PathElement::LineTo(point(10.0, 60.0)),
            PathElement::Close,
        ]
    );
}

#[test]
fn rounded_rectangle() {
    let rect = Box2D::new(point(0.0, 0.0), point(100.0, 50.0));

    let mut square_corners = Path::new();
    square_corners.add_rounded_rectangle(&rect, 0.0);
    let mut plain = Path::new();
    plain.add_rectangle(&rect);
    assert_eq!(square_corners, plain);

    let mut path = Path::new();
    path.add_rounded_rectangle(&rect, 0.1);
    use PathCommand::*;
    assert_eq!(
        commands(&path),
        vec![MoveTo, CurveTo, LineTo, CurveTo, LineTo, CurveTo, LineTo, CurveTo, Close]
    );
    // The corner radius follows the smallest side.
    assert_eq!(path[0].point(), Some(point(0.0, 5.0)));
    assert_eq!(path[1].point(), Some(point(5.0, 0.0)));
    assert_eq!(path[2].point(), Some(point(95.0, 0.0)));
    assert_eq!(path[7].point(), Some(point(0.0, 45.0)));
}

#[test]
fn oval() {
    let mut path = Path::new();
    path.add_oval(&Box2D::new(point(0.0, 0.0), point(100.0, 50.0)));

    use PathCommand::*;
    assert_eq!(commands(&path), vec![MoveTo, CurveTo, CurveTo, CurveTo, CurveTo]);
    assert_eq!(path[0].point(), Some(point(50.0, 50.0)));
    assert_eq!(path[1].point(), Some(point(0.0, 25.0)));
    assert_eq!(path[2].point(), Some(point(50.0, 0.0)));
    assert_eq!(path[3].point(), Some(point(100.0, 25.0)));
    assert_eq!(path[4].point(), path[0].point());
    assert_eq!(path[1].ctrl1(), Some(point(50.0 - 50.0 * KAPPA, 50.0)));
}

#[test]
fn star() {
    let mut path = Path::new();
    path.add_star(point(0.0, 0.0), 5, 10.0, 5.0);

    assert_eq!(path.len(), 11);
    assert_eq!(path[0], PathElement::MoveTo(point(0.0, 10.0)));
    assert_eq!(path[10], PathElement::Close);

    for (i, element) in path.elements()[1..10].iter().enumerate() {
        let expected = if i % 2 == 0 { 5.0 } else { 10.0 };
        let p = element.point().unwrap();
        assert!((p.to_vector().length() - expected).abs() < 1e-9);
    }
}

#[test]
fn star_with_many_branches() {
    let center = point(10.0, -10.0);
    let last = 2 * u64::from(u32::MAX) - 1;

    let p = star_vertex(center, last, u32::MAX, 100.0, 40.0);
    assert!(((p - center).length() - 40.0).abs() < 1e-6);
    // The last corner sits just before the top of the star.
    assert!(p.x < center.x);
    assert!(p.y > center.y);

    assert_eq!(star_vertex(center, 0, u32::MAX, 100.0, 40.0), point(10.0, 90.0));
}

#[test]
fn arrows() {
    let mut path = Path::new();
    path.add_arrow(point(100.0, 50.0), 50.0, ArrowStyle::Normal);
    assert_eq!(path.len(), 9);
    assert_eq!(path[1], PathElement::LineTo(point(80.0, 70.0)));
    assert_eq!(path[3], PathElement::LineTo(point(50.0, 60.0)));
    assert_eq!(path[8], PathElement::Close);

    let mut path = Path::new();
    path.add_arrow(point(100.0, 50.0), 50.0, ArrowStyle::FortyFive);
    assert_eq!(path.len(), 10);
    assert_eq!(path[1], PathElement::LineTo(point(100.0, 85.0)));
    assert_eq!(path[9], PathElement::LineTo(point(100.0, 50.0)));
    assert!(path.elements().iter().all(|e| e.command() != PathCommand::Close));
}

#[test]
fn polyline_and_line() {
    let mut path = Path::new();
    path.add_polyline(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]], true);
    path.add_polyline(Vec::<(f64, f64)>::new(), true);
    path.add_line(point(5.0, 5.0), point(6.0, 6.0));

    use PathCommand::*;
    assert_eq!(
        commands(&path),
        vec![MoveTo, LineTo, LineTo, Close, MoveTo, LineTo]
    );
}

#[test]
fn replay_elements() {
    let mut source = Path::new();
    source.add_oval(&Box2D::new(point(0.0, 0.0), point(10.0, 10.0)));
    source.close();

    let mut copy = Path::new();
    copy.extend_elements(source.elements().iter().copied());
    assert_eq!(copy, source);
}
