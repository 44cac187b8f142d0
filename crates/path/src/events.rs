use crate::math::{point, Point};
use crate::PathElement;

use std::iter::FusedIterator;

/// An element of a path along with the positions it implicitly depends on.
///
/// Move-to elements and the first element of a path produce `Begin` events, every
/// other element produces exactly one edge event.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Straight line from the current position back to the start of the contour.
    Close {
        from: Point,
        to: Point,
    },
}

impl PathEvent {
    pub fn is_edge(&self) -> bool {
        match self {
            PathEvent::Begin { .. } => false,
            _ => true,
        }
    }

    pub fn to(&self) -> Point {
        match *self {
            PathEvent::Line { to, .. }
            | PathEvent::Cubic { to, .. }
            | PathEvent::Close { to, .. }
            | PathEvent::Begin { at: to } => to,
        }
    }
}

/// An iterator of `PathEvent` over a slice of path elements.
///
/// The first element of the sequence is treated as the start of a contour
/// whatever its command, a leading close starts at the origin.
#[derive(Clone)]
pub struct Iter<'l> {
    elements: std::slice::Iter<'l, PathElement>,
    current: Point,
    first: Point,
    started: bool,
}

impl<'l> Iter<'l> {
    pub fn new(elements: &'l [PathElement]) -> Self {
        Iter {
            elements: elements.iter(),
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
            started: false,
        }
    }

    /// The start of the contour the iterator is currently in.
    #[inline]
    pub fn contour_start(&self) -> Point {
        self.first
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        let element = *self.elements.next()?;

        if !self.started {
            self.started = true;
            if let Some(at) = element.point() {
                self.current = at;
                self.first = at;
            }
            return Some(PathEvent::Begin { at: self.current });
        }

        let from = self.current;
        Some(match element {
            PathElement::MoveTo(at) => {
                self.current = at;
                self.first = at;
                PathEvent::Begin { at }
            }
            PathElement::LineTo(to) => {
                self.current = to;
                PathEvent::Line { from, to }
            }
            PathElement::CurveTo { ctrl1, ctrl2, to } => {
                self.current = to;
                PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                }
            }
            PathElement::Close => {
                self.current = self.first;
                PathEvent::Close {
                    from,
                    to: self.first,
                }
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<'l> ExactSizeIterator for Iter<'l> {}
impl<'l> FusedIterator for Iter<'l> {}

#[test]
fn one_event_per_element() {
    let elements = [
        PathElement::MoveTo(point(0.0, 0.0)),
        PathElement::LineTo(point(10.0, 0.0)),
        PathElement::CurveTo {
            ctrl1: point(15.0, 0.0),
            ctrl2: point(15.0, 10.0),
            to: point(10.0, 10.0),
        },
        PathElement::Close,
        PathElement::LineTo(point(0.0, 20.0)),
    ];

    let events: Vec<PathEvent> = Iter::new(&elements).collect();
    assert_eq!(
        events,
        vec![
            PathEvent::Begin {
                at: point(0.0, 0.0)
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(10.0, 0.0)
            },
            PathEvent::Cubic {
                from: point(10.0, 0.0),
                ctrl1: point(15.0, 0.0),
                ctrl2: point(15.0, 10.0),
                to: point(10.0, 10.0)
            },
            PathEvent::Close {
                from: point(10.0, 10.0),
                to: point(0.0, 0.0)
            },
            // After a close the current position is the start of the contour.
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(0.0, 20.0)
            },
        ]
    );
}

#[test]
fn first_element_begins_the_contour() {
    let elements = [
        PathElement::LineTo(point(5.0, 5.0)),
        PathElement::LineTo(point(10.0, 5.0)),
        PathElement::Close,
    ];

    let mut iter = Iter::new(&elements);
    assert_eq!(iter.len(), 3);
    assert_eq!(
        iter.next(),
        Some(PathEvent::Begin {
            at: point(5.0, 5.0)
        })
    );
    assert_eq!(iter.contour_start(), point(5.0, 5.0));
    assert!(iter.next().unwrap().is_edge());
    assert_eq!(
        iter.next(),
        Some(PathEvent::Close {
            from: point(10.0, 5.0),
            to: point(5.0, 5.0)
        })
    );
    assert_eq!(iter.next(), None);

    let leading_close = [PathElement::Close];
    assert_eq!(
        Iter::new(&leading_close).next(),
        Some(PathEvent::Begin {
            at: point(0.0, 0.0)
        })
    );
}
