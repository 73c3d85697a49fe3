//! Basic 2D types.
//!
//! - `Axis`: selects the x or y coordinate.
//! - `Rect`: closed axis-aligned rectangle with `bottom_left <= top_right`.
//! - `Bounds`: bounding box with an explicit empty state.

use nalgebra::Vector2;
use std::fmt;

/// Integer point `(x, y)`.
pub type Point = Vector2<i64>;

/// Coordinate axis. Cuts perpendicular to `X` are vertical lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Search order used at every level of the partition test.
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Closed axis-aligned rectangle. Fields are private so the corner order
/// invariant cannot be broken after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    bottom_left: Point,
    top_right: Point,
}

impl Rect {
    /// Rectangle spanned by two opposite corners given in any order.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            bottom_left: a.zip_map(&b, |p: i64, q: i64| p.min(q)),
            top_right: a.zip_map(&b, |p: i64, q: i64| p.max(q)),
        }
    }

    /// Same as `new`, from the `x1 y1 x2 y2` record layout of the input format.
    #[inline]
    pub fn from_corners(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        self.top_right
    }

    /// Lower bound on `axis`.
    #[inline]
    pub fn lo(&self, axis: Axis) -> i64 {
        self.bottom_left[axis.index()]
    }

    /// Upper bound on `axis`.
    #[inline]
    pub fn hi(&self, axis: Axis) -> i64 {
        self.top_right[axis.index()]
    }

    /// Sort key for a projection on `axis`: lower bound, then upper bound, then
    /// the other axis. Equal keys mean equal rectangles, so sorting by it is
    /// independent of the input order.
    #[inline]
    pub fn sort_key(&self, axis: Axis) -> (i64, i64, i64, i64) {
        let o = axis.other();
        (self.lo(axis), self.hi(axis), self.lo(o), self.hi(o))
    }

    /// Smallest rectangle containing both. Associative and commutative.
    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            bottom_left: self
                .bottom_left
                .zip_map(&other.bottom_left, |p: i64, q: i64| p.min(q)),
            top_right: self
                .top_right
                .zip_map(&other.top_right, |p: i64, q: i64| p.max(q)),
        }
    }

    #[inline]
    pub fn translate(&self, d: Point) -> Rect {
        Rect {
            bottom_left: self.bottom_left + d,
            top_right: self.top_right + d,
        }
    }

    /// Mirror image across the line `axis = 0`, renormalized.
    pub fn reflect(&self, axis: Axis) -> Rect {
        let mut a = self.bottom_left;
        let mut b = self.top_right;
        a[axis.index()] = -a[axis.index()];
        b[axis.index()] = -b[axis.index()];
        Rect::new(a, b)
    }

    /// True if the open interiors intersect. Shared edges and corners do not count.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        Axis::BOTH
            .iter()
            .all(|&a| self.lo(a) < other.hi(a) && other.lo(a) < self.hi(a))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.bottom_left.x, self.bottom_left.y, self.top_right.x, self.top_right.y
        )
    }
}

/// Bounding box of a possibly empty set of rectangles.
///
/// `Bounds::EMPTY` is the identity of `merge`: `EMPTY.merge(b) == b == b.merge(EMPTY)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds(Option<Rect>);

impl Bounds {
    pub const EMPTY: Bounds = Bounds(None);

    #[inline]
    pub fn of(rect: Rect) -> Self {
        Bounds(Some(rect))
    }

    #[inline]
    pub fn rect(self) -> Option<Rect> {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn merge(self, other: Bounds) -> Bounds {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Bounds(Some(a.union(&b))),
            (Some(a), None) | (None, Some(a)) => Bounds(Some(a)),
            (None, None) => Bounds::EMPTY,
        }
    }

    /// Lower bound on `axis`, `None` when empty.
    #[inline]
    pub fn lo(self, axis: Axis) -> Option<i64> {
        self.0.map(|r| r.lo(axis))
    }

    /// Upper bound on `axis`, `None` when empty.
    #[inline]
    pub fn hi(self, axis: Axis) -> Option<i64> {
        self.0.map(|r| r.hi(axis))
    }
}

impl From<Rect> for Bounds {
    #[inline]
    fn from(rect: Rect) -> Self {
        Bounds::of(rect)
    }
}

impl FromIterator<Rect> for Bounds {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bounds::EMPTY, |acc, r| acc.merge(Bounds::of(r)))
    }
}
