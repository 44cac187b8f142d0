//! The default path data structure.
//!

use crate::builder::PathBuilder;
use crate::geom::traits::Transformation;
use crate::geom::DEFAULT_CURVE_SAMPLES;
use crate::math::Point;
use crate::measure::{measure_elements, SampleType};
use crate::{Iter, PathElement, Position};

use std::cell::OnceCell;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// A simple path data structure.
///
/// # Representation
///
/// Paths store their elements in a vector, in insertion order. A path can contain
/// several contours, each of them starting at a `MoveTo` element.
///
/// # Relative length cache
///
/// Measuring a path is comparatively expensive (each curve is sampled to approximate
/// its length), while sampling many positions along the same path needs the relative
/// length of every segment each time. Paths therefore memoize the relative segment
/// lengths computed with the default sample count the first time they are requested
/// (see [`Path::relative_lengths`]). Any mutation of the path clears the memoized
/// value.
///
/// The cache lives in a `OnceCell`, so a `Path` is `Send` but not `Sync`. Clone it
/// before reading it from several threads.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    elements: Vec<PathElement>,
    #[cfg_attr(feature = "serialization", serde(skip))]
    relative_lengths: OnceCell<Box<[f64]>>,
}

impl Path {
    /// Creates an empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            elements: Vec::new(),
            relative_lengths: OnceCell::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Path {
        Path::from_elements(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn from_elements(elements: Vec<PathElement>) -> Path {
        Path {
            elements,
            relative_lengths: OnceCell::new(),
        }
    }

    /// Creates a polyline: a `MoveTo` to the first point followed by a `LineTo` to
    /// each of the others.
    pub fn from_points<Points>(points: Points) -> Path
    where
        Points: IntoIterator,
        Points::Item: Position,
    {
        let mut path = Path::new();
        for (i, p) in points.into_iter().enumerate() {
            let p = p.position();
            if i == 0 {
                path.push(PathElement::MoveTo(p));
            } else {
                path.push(PathElement::LineTo(p));
            }
        }

        path
    }

    /// Appends an element at the end of the path.
    #[inline]
    pub fn push(&mut self, element: PathElement) {
        self.invalidate();
        self.elements.push(element);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<PathElement> {
        self.elements.get(index).copied()
    }

    #[inline]
    pub fn first(&self) -> Option<PathElement> {
        self.elements.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<PathElement> {
        self.elements.last().copied()
    }

    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Replaces the whole sequence of elements.
    pub fn replace_elements(&mut self, elements: Vec<PathElement>) {
        self.invalidate();
        self.elements = elements;
    }

    #[inline]
    pub fn into_elements(self) -> Vec<PathElement> {
        self.elements
    }

    /// Iterates over the path, producing one event per element.
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter::new(&self.elements)
    }

    /// Iterates over the contours of the path, each materialized as its own `Path`.
    #[inline]
    pub fn contours(&self) -> Contours {
        Contours::new(&self.elements)
    }

    /// Applies a transform to all of the path's points.
    pub fn transformed<T: Transformation<f64>>(&self, transform: &T) -> Path {
        self.elements
            .iter()
            .map(|element| element.transformed(transform))
            .collect()
    }

    /// Returns the length of each segment as a fraction of the total length of the
    /// path, measuring curves with the default sample count.
    ///
    /// The result is memoized until the path is mutated.
    pub fn relative_lengths(&self) -> &[f64] {
        self.relative_lengths.get_or_init(|| {
            let lengths =
                measure_elements(&self.elements, SampleType::Normalized, DEFAULT_CURVE_SAMPLES);
            log::trace!("cached {} relative segment lengths", lengths.len());

            lengths.into_boxed_slice()
        })
    }

    /// Returns the memoized relative segment lengths if they have been computed since
    /// the last mutation.
    #[inline]
    pub fn cached_relative_lengths(&self) -> Option<&[f64]> {
        self.relative_lengths.get().map(|lengths| &lengths[..])
    }

    #[inline]
    fn invalidate(&mut self) {
        self.relative_lengths.take();
    }
}

impl PathBuilder for Path {
    fn move_to(&mut self, to: Point) {
        self.push(PathElement::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        self.push(PathElement::LineTo(to));
    }

    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push(PathElement::CurveTo { ctrl1, ctrl2, to });
    }

    fn close(&mut self) {
        self.push(PathElement::Close);
    }

    fn reserve(&mut self, elements: usize) {
        self.elements.reserve(elements);
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Path) -> bool {
        self.elements == other.elements
    }
}

impl From<Vec<PathElement>> for Path {
    fn from(elements: Vec<PathElement>) -> Path {
        Path::from_elements(elements)
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Path {
        Path::from_elements(iter.into_iter().collect())
    }
}

impl Extend<PathElement> for Path {
    fn extend<T: IntoIterator<Item = PathElement>>(&mut self, iter: T) {
        self.invalidate();
        self.elements.extend(iter);
    }
}

impl std::ops::Index<usize> for Path {
    type Output = PathElement;
    fn index(&self, index: usize) -> &PathElement {
        &self.elements[index]
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = crate::PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;

        for element in &self.elements {
            match *element {
                PathElement::MoveTo(to) => {
                    write!(formatter, " M")?;
                    write_point(formatter, to)?;
                }
                PathElement::LineTo(to) => {
                    write!(formatter, " L")?;
                    write_point(formatter, to)?;
                }
                PathElement::CurveTo { ctrl1, ctrl2, to } => {
                    write!(formatter, " C")?;
                    write_point(formatter, ctrl1)?;
                    write_point(formatter, ctrl2)?;
                    write_point(formatter, to)?;
                }
                PathElement::Close => {
                    write!(formatter, " Z")?;
                }
            }
        }

        write!(formatter, " \"")
    }
}

/// An iterator over the contours of a path.
///
/// A `MoveTo` starts a new contour. Consecutive `MoveTo`s with nothing drawn between
/// them collapse into one contour start, so no empty contour is ever produced. A
/// `Close` ends the shape of a contour without starting a new one.
///
/// If the path does not start with a `MoveTo`, the first drawn element begins the
/// first contour at its anchor.
#[derive(Clone)]
pub struct Contours<'l> {
    elements: &'l [PathElement],
    index: usize,
}

impl<'l> Contours<'l> {
    fn new(elements: &'l [PathElement]) -> Self {
        Contours { elements, index: 0 }
    }
}

impl<'l> Iterator for Contours<'l> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        let mut contour: Vec<PathElement> = Vec::new();
        let mut drawn = false;

        while let Some(&element) = self.elements.get(self.index) {
            match element {
                PathElement::MoveTo(..) if drawn => {
                    // Leave the move-to for the next contour.
                    return Some(Path::from_elements(contour));
                }
                PathElement::MoveTo(..) => {
                    contour.clear();
                    contour.push(element);
                }
                PathElement::Close => {
                    if drawn {
                        contour.push(element);
                    }
                }
                PathElement::LineTo(to) | PathElement::CurveTo { to, .. } => {
                    if contour.is_empty() {
                        contour.push(PathElement::MoveTo(to));
                    } else {
                        contour.push(element);
                        drawn = true;
                    }
                }
            }

            self.index += 1;
        }

        if drawn {
            Some(Path::from_elements(contour))
        } else {
            None
        }
    }
}

impl<'l> FusedIterator for Contours<'l> {}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn two_contours() -> Path {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(10.0, 0.0));
    path.line_to(point(10.0, 10.0));
    path.close();
    path.move_to(point(20.0, 0.0));
    path.curve_to(point(25.0, 0.0), point(30.0, 5.0), point(30.0, 10.0));

    path
}

#[test]
fn build_path() {
    let path = two_contours();

    assert_eq!(path.len(), 6);
    assert!(!path.is_empty());
    assert_eq!(path[0], PathElement::MoveTo(point(0.0, 0.0)));
    assert_eq!(path.get(3), Some(PathElement::Close));
    assert_eq!(path.get(6), None);
    assert_eq!(path.first(), Some(PathElement::MoveTo(point(0.0, 0.0))));
    assert_eq!(path.last().and_then(|e| e.point()), Some(point(30.0, 10.0)));
    assert_eq!(path.iter().count(), 6);
    assert_eq!(path.iter().filter(|evt| evt.is_edge()).count(), 4);
}

#[test]
fn empty_path() {
    let path = Path::new();
    assert!(path.is_empty());
    assert_eq!(path.len(), 0);
    assert_eq!(path.iter().next(), None);
    assert_eq!(path.contours().count(), 0);
    assert_eq!(format!("{:?}", path), "\" \"");
}

#[test]
fn from_points() {
    let path = Path::from_points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert_eq!(
        path.elements(),
        &[
            PathElement::MoveTo(point(0.0, 0.0)),
            PathElement::LineTo(point(10.0, 0.0)),
            PathElement::LineTo(point(10.0, 10.0)),
        ]
    );

    assert!(Path::from_points(Vec::<[f64; 2]>::new()).is_empty());
}

#[test]
fn collect_and_extend() {
    let path = two_contours();
    let collected: Path = path.elements().iter().copied().collect();
    assert_eq!(collected, path);

    let mut extended = Path::from_elements(path.elements()[..3].to_vec());
    extended.extend(path.elements()[3..].iter().copied());
    assert_eq!(extended, path);

    assert_eq!(Path::from(path.clone().into_elements()), path);
}

#[test]
fn debug_format() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(1.0, 2.0));
    path.curve_to(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0));
    path.close();

    assert_eq!(
        format!("{:?}", path),
        "\" M 0.0 0.0 L 1.0 2.0 C 1.0 1.0 2.0 2.0 3.0 3.0 Z \""
    );
}

#[test]
fn cache_is_cleared_on_mutation() {
    let mut path = two_contours();
    assert_eq!(path.cached_relative_lengths(), None);

    let lengths = path.relative_lengths().to_vec();
    assert_eq!(lengths.len(), 5);
    assert_eq!(path.cached_relative_lengths(), Some(&lengths[..]));
    assert_eq!(path.relative_lengths(), &lengths[..]);

    // A clone keeps the memoized value but equality ignores it.
    let copy = path.clone();
    assert_eq!(copy.cached_relative_lengths(), Some(&lengths[..]));
    assert_eq!(copy, Path::from_elements(path.elements().to_vec()));

    path.line_to(point(0.0, 0.0));
    assert_eq!(path.cached_relative_lengths(), None);
    assert_eq!(path.relative_lengths().len(), 6);

    path.extend(Some(PathElement::Close));
    assert_eq!(path.cached_relative_lengths(), None);

    path.relative_lengths();
    path.replace_elements(Vec::new());
    assert_eq!(path.cached_relative_lengths(), None);
    assert!(path.relative_lengths().is_empty());
}

#[test]
fn memoized_lengths_match_a_fresh_measure() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(100.0, 0.0));
    path.line_to(point(100.0, 100.0));

    assert_eq!(path.relative_lengths(), &[0.5, 0.5][..]);

    // Mutating through any method remeasures the new elements.
    path.replace_elements(vec![
        PathElement::MoveTo(point(0.0, 0.0)),
        PathElement::LineTo(point(100.0, 0.0)),
        PathElement::LineTo(point(100.0, 300.0)),
    ]);
    assert_eq!(path.relative_lengths(), &[0.25, 0.75][..]);
    assert_eq!(
        path.relative_lengths(),
        &measure_elements(path.elements(), SampleType::Normalized, DEFAULT_CURVE_SAMPLES)[..]
    );
}

#[test]
fn transformed_path() {
    use crate::math::Transform;

    let path = two_contours().transformed(&Transform::scale(2.0, 2.0));
    assert_eq!(path[1], PathElement::LineTo(point(20.0, 0.0)));
    assert_eq!(path[3], PathElement::Close);
    assert_eq!(
        path[5],
        PathElement::CurveTo {
            ctrl1: point(50.0, 0.0),
            ctrl2: point(60.0, 10.0),
            to: point(60.0, 20.0),
        }
    );
}

#[test]
fn contours_split_on_move_to() {
    let path = two_contours();
    let contours: Vec<Path> = path.contours().collect();

    assert_eq!(contours.len(), 2);
    assert_eq!(contours[0].elements(), &path.elements()[..4]);
    assert_eq!(contours[1].elements(), &path.elements()[4..]);
}

#[test]
fn contours_collapse_repeated_move_to() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(10.0, 0.0));
    path.move_to(point(20.0, 0.0));
    path.move_to(point(20.0, 0.0));
    path.move_to(point(30.0, 0.0));
    path.line_to(point(40.0, 0.0));
    path.move_to(point(50.0, 0.0));

    let contours: Vec<Path> = path.contours().collect();
    assert_eq!(contours.len(), 2);
    assert_eq!(
        contours[1].elements(),
        &[
            PathElement::MoveTo(point(30.0, 0.0)),
            PathElement::LineTo(point(40.0, 0.0)),
        ]
    );

    // The iterator is restartable.
    assert_eq!(path.contours().count(), 2);
}

#[test]
fn contours_without_leading_move_to() {
    let path = Path::from_elements(vec![
        PathElement::Close,
        PathElement::LineTo(point(5.0, 5.0)),
        PathElement::LineTo(point(10.0, 5.0)),
        PathElement::Close,
    ]);

    let contours: Vec<Path> = path.contours().collect();
    assert_eq!(contours.len(), 1);
    assert_eq!(
        contours[0].elements(),
        &[
            PathElement::MoveTo(point(5.0, 5.0)),
            PathElement::LineTo(point(10.0, 5.0)),
            PathElement::Close,
        ]
    );

    let only_moves = Path::from_points(&[(0.0, 0.0)]);
    assert_eq!(only_moves.contours().next(), None);
}
