//! Intersection results with at most two points.

use crate::point::Point;

/// Points where two loci meet, in a fixed, documented order per algorithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Empty,
    One(Point),
    Two(Point, Point),
}

impl Intersection {
    /// Keep the first two points of `points`.
    pub(crate) fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut it = points.into_iter();
        match (it.next(), it.next()) {
            (None, _) => Intersection::Empty,
            (Some(p), None) => Intersection::One(p),
            (Some(p), Some(q)) => Intersection::Two(p, q),
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Intersection::Empty => 0,
            Intersection::One(_) => 1,
            Intersection::Two(_, _) => 2,
        }
    }
    #[inline]
    pub fn first(&self) -> Option<Point> {
        match *self {
            Intersection::Empty => None,
            Intersection::One(p) | Intersection::Two(p, _) => Some(p),
        }
    }
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Intersection::Empty => Vec::new(),
            Intersection::One(p) => vec![p],
            Intersection::Two(p, q) => vec![p, q],
        }
    }
    /// Drop points failing `keep`, preserving order.
    pub fn filter<F: Fn(&Point) -> bool>(self, keep: F) -> Self {
        Self::from_points(self.points().into_iter().filter(|p| keep(p)))
    }
}

impl IntoIterator for Intersection {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points().into_iter()
    }
}
