use std::fmt;
use std::time::Duration;

use tilepath_core::Point;

use crate::cost::{self, Cost};
use crate::grid::WalkabilityGrid;

/// Outcome of a path request.
///
/// "No path" is an ordinary result: a blocked origin, a blocked
/// destination and an exhausted search all produce [`NotFound`].
///
/// [`NotFound`]: PathResult::NotFound
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// Tiles from origin to destination, both included.
    Found(Vec<Point>),
    #[default]
    NotFound,
}

impl PathResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path tiles, or an empty slice.
    #[inline]
    pub fn path(&self) -> &[Point] {
        match self {
            Self::Found(path) => path,
            Self::NotFound => &[],
        }
    }

    /// Number of moves in the path.
    pub fn steps(&self) -> Option<usize> {
        match self {
            Self::Found(path) => Some(path.len().saturating_sub(1)),
            Self::NotFound => None,
        }
    }

    /// Total step cost of the path.
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Found(path) => Some(cost::path_cost(path)),
            Self::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

impl From<Option<Vec<Point>>> for PathResult {
    fn from(path: Option<Vec<Point>>) -> Self {
        path.map_or(Self::NotFound, Self::Found)
    }
}

/// The A* implementation used for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// List-based reference search ([`NaiveSearch`](crate::NaiveSearch)).
    Naive,
    /// Pooled, heap-backed search ([`OptimizedSearch`](crate::OptimizedSearch)).
    #[default]
    Optimized,
}

impl Algorithm {
    /// The other algorithm.
    pub fn toggle(self) -> Self {
        match self {
            Self::Naive => Self::Optimized,
            Self::Optimized => Self::Naive,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => f.write_str("naive"),
            Self::Optimized => f.write_str("optimized"),
        }
    }
}

/// What a search did, for comparing the two algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub algorithm: Algorithm,
    /// Nodes moved to the closed set.
    pub expanded: usize,
    /// Wall-clock time of the search, zero when timing is disabled.
    pub elapsed: Duration,
}

/// A complete, self-contained A* search over a [`WalkabilityGrid`].
pub trait PathSearch {
    /// Which algorithm this is.
    fn algorithm(&self) -> Algorithm;

    /// Search for a path from `origin` to `destination`.
    ///
    /// Returns the result and the number of expanded nodes.
    fn search(
        &mut self,
        grid: &WalkabilityGrid,
        origin: Point,
        destination: Point,
    ) -> (PathResult, usize);

    /// Like [`search`](Self::search), discarding the expansion count.
    fn find_path(
        &mut self,
        grid: &WalkabilityGrid,
        origin: Point,
        destination: Point,
    ) -> PathResult {
        self.search(grid, origin, destination).0
    }
}
