//! Tile geometry: [`Point`] and [`Range`].
//!
//! Coordinates are tile indices. X grows right, Y grows down, so "north"
//! is `y - 1`.

use std::fmt;
use std::ops::{Add, Sub};

/// A tile coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `dx` columns and `dy` rows.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (L∞) distance: the number of 8-directional steps between
    /// two tiles on an open grid.
    #[inline]
    pub fn chebyshev(self, other: Point) -> i32 {
        let d = self - other;
        d.x.abs().max(d.y.abs())
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        let d = self - other;
        d.x.abs() + d.y.abs()
    }

    /// Whether `other` is one of the eight tiles surrounding `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self != other && self.chebyshev(other) == 1
    }

    /// Whether the step from `self` to `other` changes both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, d: Self) -> Self {
        self.shift(d.x, d.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, d: Self) -> Self {
        self.shift(-d.x, -d.y)
    }
}

/// The tiles of a map: every point with `min.x <= x < max.x` and
/// `min.y <= y < max.y`.
///
/// Tiles are numbered row by row, which is the layout of every per-tile
/// buffer in the crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The tiles between two corners, `min` inclusive and `max` exclusive.
    /// A corner pair with `max` not past `min` gives an empty range.
    #[inline]
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self {
            min,
            max: Point::new(max.x.max(min.x), max.y.max(min.y)),
        }
    }

    /// The tiles of a `width` x `height` map anchored at the origin.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::from_corners(Point::ZERO, Point::new(width, height))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of tiles.
    #[inline]
    pub fn len(self) -> usize {
        self.width().max(0) as usize * self.height().max(0) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `p` is one of the tiles. Points outside are never wrapped.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Row-major position of `p`, or `None` if `p` is outside the range.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let d = p - self.min;
        Some(d.y as usize * self.width() as usize + d.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of). `idx` must be below
    /// [`len`](Self::len).
    #[inline]
    pub fn point_at(self, idx: usize) -> Point {
        let w = self.width() as usize;
        self.min.shift((idx % w) as i32, (idx / w) as i32)
    }

    /// Every tile, in row-major order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            end: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at {}", self.width(), self.height(), self.min)
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let p = self.range.point_at(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
