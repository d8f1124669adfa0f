use tilepath_core::Point;

use crate::grid::WalkabilityGrid;

/// Neighbour offsets in expansion order: N, NE, NW, S, SE, SW, E, W.
///
/// The order decides which of several equally good paths a search returns,
/// so it is fixed.
pub const SEARCH_ORDER: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, -1),
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// When a diagonal step to a walkable tile is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalRule {
    /// Any walkable diagonal neighbour, even between two blocked tiles.
    Always,
    /// At least one of the two flanking cardinal tiles must be walkable.
    AnyFlankOpen,
    /// Both flanking cardinal tiles must be walkable, so paths never touch
    /// a blocked corner.
    #[default]
    BothFlanksOpen,
}

impl DiagonalRule {
    /// Whether the diagonal step from `p` by `dir` passes this rule.
    #[inline]
    pub fn admits(self, grid: &WalkabilityGrid, p: Point, dir: Point) -> bool {
        let flank_x = || grid.is_walkable(p.shift(dir.x, 0));
        let flank_y = || grid.is_walkable(p.shift(0, dir.y));
        match self {
            Self::Always => true,
            Self::AnyFlankOpen => flank_x() || flank_y(),
            Self::BothFlanksOpen => flank_x() && flank_y(),
        }
    }
}

/// Reusable neighbour buffer.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Walkable neighbours of `p` in [`SEARCH_ORDER`], with diagonals
    /// filtered by `rule`.
    pub fn walkable(&mut self, grid: &WalkabilityGrid, p: Point, rule: DiagonalRule) -> &[Point] {
        self.buf.clear();
        for dir in SEARCH_ORDER {
            let n = p + dir;
            if !grid.is_walkable(n) {
                continue;
            }
            if dir.x != 0 && dir.y != 0 && !rule.admits(grid, p, dir) {
                continue;
            }
            self.buf.push(n);
        }
        &self.buf
    }
}
