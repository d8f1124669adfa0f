//! Pooled A* with a binary-heap open set.
//!
//! Every tile owns one [`SearchNode`] in a [`NodePool`], so node lookup is an
//! index computation and open/closed membership is a flag on the node. The
//! heap has no decrease-key: an improved node is pushed again and the
//! outdated entry is dropped when it surfaces.

use std::collections::BinaryHeap;

use tilepath_core::Point;

use crate::cost::{octile, step_cost};
use crate::grid::WalkabilityGrid;
use crate::neighbors::{DiagonalRule, Neighbors};
use crate::pool::{NodePool, OpenEntry, SearchNode};
use crate::reconstruct::reconstruct;
use crate::search::{Algorithm, PathResult, PathSearch};

/// Heap-backed A* over a reusable node pool.
///
/// The pool is resized to the grid on each search and fully reset before
/// it, so one `OptimizedSearch` can serve any number of grids, one search
/// at a time.
pub struct OptimizedSearch {
    pool: NodePool,
    open: BinaryHeap<OpenEntry>,
    neighbors: Neighbors,
    rule: DiagonalRule,
}

impl Default for OptimizedSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizedSearch {
    /// Create a search that refuses to cut corners
    /// ([`DiagonalRule::BothFlanksOpen`]).
    pub fn new() -> Self {
        Self::with_rule(DiagonalRule::default())
    }

    /// Create a search admitting diagonal steps according to `rule`.
    pub fn with_rule(rule: DiagonalRule) -> Self {
        Self {
            pool: NodePool::default(),
            open: BinaryHeap::new(),
            neighbors: Neighbors::new(),
            rule,
        }
    }

    /// Create a search with its node pool already sized for `grid`.
    pub fn for_grid(grid: &WalkabilityGrid) -> Self {
        let mut s = Self::new();
        s.pool.fit(grid.range());
        s
    }

    #[inline]
    pub fn rule(&self) -> DiagonalRule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: DiagonalRule) {
        self.rule = rule;
    }

    /// Node state left behind by the last search.
    #[inline]
    pub fn pool(&self) -> &NodePool {
        &self.pool
    }
}

impl PathSearch for OptimizedSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Optimized
    }

    fn search(
        &mut self,
        grid: &WalkabilityGrid,
        origin: Point,
        destination: Point,
    ) -> (PathResult, usize) {
        self.pool.fit(grid.range());
        self.pool.reset();
        self.open.clear();

        if !grid.is_walkable(origin) || !grid.is_walkable(destination) {
            log::trace!("optimized: blocked endpoint {origin} -> {destination}");
            return (PathResult::NotFound, 0);
        }
        if origin == destination {
            return (PathResult::Found(vec![origin]), 0);
        }
        let (Some(start), Some(goal)) = (
            self.pool.index(origin.x, origin.y),
            self.pool.index(destination.x, destination.y),
        ) else {
            return (PathResult::NotFound, 0);
        };

        let h = octile(origin, destination);
        *self.pool.node_mut(start) = SearchNode {
            g: 0,
            h,
            parent: None,
            in_open: true,
            in_closed: false,
        };
        let mut seq = 0;
        self.open.push(OpenEntry {
            idx: start,
            score: h,
            h,
            seq,
            g: 0,
        });

        let mut expanded = 0;
        let found = 'search: loop {
            let Some(entry) = self.open.pop() else {
                break 'search false;
            };
            let ci = entry.idx;
            let current = *self.pool.node(ci);

            // Skip entries superseded by a later improvement.
            if current.in_closed || current.g != entry.g {
                continue;
            }

            {
                let n = self.pool.node_mut(ci);
                n.in_open = false;
                n.in_closed = true;
            }
            expanded += 1;

            if ci == goal {
                break 'search true;
            }

            let cp = self.pool.point(ci);
            for &np in self.neighbors.walkable(grid, cp, self.rule) {
                let Some(ni) = self.pool.index(np.x, np.y) else {
                    continue;
                };
                let tentative_g = current.g + step_cost(cp, np);

                let n = self.pool.node_mut(ni);
                if n.in_closed {
                    continue;
                }
                if n.in_open {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.h = octile(np, destination);
                    n.in_open = true;
                }
                n.g = tentative_g;
                n.parent = Some(ci);

                seq += 1;
                self.open.push(OpenEntry {
                    idx: ni,
                    score: n.score(),
                    h: n.h,
                    seq,
                    g: tentative_g,
                });
            }
        };

        if !found {
            return (PathResult::NotFound, expanded);
        }

        let pool = &self.pool;
        let path = reconstruct(goal, |i| (pool.point(i), pool.node(i).parent));
        (PathResult::Found(path), expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> WalkabilityGrid {
        WalkabilityGrid::from_ascii(s).unwrap()
    }

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn open_diagonal() {
        let g = grid(".....\n.....\n.....\n.....\n.....");
        let r = OptimizedSearch::new().find_path(&g, Point::new(0, 0), Point::new(4, 4));
        assert_eq!(
            r,
            PathResult::Found(pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]))
        );
    }

    #[test]
    fn around_blocked_center() {
        let g = grid("...\n.#.\n...");
        let r = OptimizedSearch::new().find_path(&g, Point::new(0, 0), Point::new(2, 2));
        let path = r.path();
        assert_eq!(path.len(), 5);
        assert!(!path.contains(&Point::new(1, 1)));
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(2, 2)));
    }

    #[test]
    fn around_blocked_center_with_one_flank_rule() {
        let g = grid("...\n.#.\n...");
        let mut s = OptimizedSearch::with_rule(DiagonalRule::AnyFlankOpen);
        let r = s.find_path(&g, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(r.path().len(), 4);
        assert!(!r.path().contains(&Point::new(1, 1)));
    }

    #[test]
    fn refuses_diagonal_gap() {
        let g = grid(".#\n#.");
        let mut s = OptimizedSearch::new();
        assert_eq!(
            s.find_path(&g, Point::new(0, 0), Point::new(1, 1)),
            PathResult::NotFound
        );
        s.set_rule(DiagonalRule::AnyFlankOpen);
        assert_eq!(
            s.find_path(&g, Point::new(0, 0), Point::new(1, 1)),
            PathResult::NotFound
        );
        s.set_rule(DiagonalRule::Always);
        assert!(s.find_path(&g, Point::new(0, 0), Point::new(1, 1)).is_found());
    }

    #[test]
    fn gap_forces_detour() {
        let g = grid(
            "\
.#.
#..
...",
        );
        let r = OptimizedSearch::new().find_path(&g, Point::new(2, 0), Point::new(0, 2));
        assert!(r.is_found());
        for w in r.path().windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
        // (0,0) is only reachable through the gap.
        let r = OptimizedSearch::with_rule(DiagonalRule::AnyFlankOpen).find_path(
            &g,
            Point::new(2, 2),
            Point::new(0, 0),
        );
        assert_eq!(r, PathResult::NotFound);
    }

    #[test]
    fn same_tile_and_blocked() {
        let g = grid("..\n.#");
        let mut s = OptimizedSearch::new();
        assert_eq!(
            s.search(&g, Point::new(0, 1), Point::new(0, 1)),
            (PathResult::Found(vec![Point::new(0, 1)]), 0)
        );
        assert_eq!(s.find_path(&g, Point::new(0, 0), Point::new(1, 1)), PathResult::NotFound);
        assert_eq!(s.find_path(&g, Point::new(-1, 0), Point::new(1, 0)), PathResult::NotFound);
    }

    #[test]
    fn pool_is_reset_between_searches() {
        let g = grid("....\n....\n....");
        let mut s = OptimizedSearch::for_grid(&g);
        assert!(s.find_path(&g, Point::new(0, 0), Point::new(3, 2)).is_found());
        assert!(s.pool().node(0).in_closed);

        // A blocked request still wipes the previous search.
        let blocked = grid("#...\n....\n....");
        s.find_path(&blocked, Point::new(0, 0), Point::new(3, 2));
        assert!((0..s.pool().len()).all(|i| !s.pool().node(i).is_visited()));
    }

    #[test]
    fn pool_follows_grid_size() {
        let mut s = OptimizedSearch::new();
        let small = grid("..\n..");
        let big = grid("......\n......\n......");
        assert!(s.find_path(&small, Point::new(0, 0), Point::new(1, 1)).is_found());
        assert_eq!(s.pool().len(), 4);
        let r = s.find_path(&big, Point::new(0, 0), Point::new(5, 2));
        assert_eq!(r.steps(), Some(5));
        assert_eq!(s.pool().len(), 18);
    }

    #[test]
    fn idempotent() {
        let g = grid(
            "\
......
.##...
...#..
.#....",
        );
        let mut s = OptimizedSearch::new();
        let a = s.find_path(&g, Point::new(0, 3), Point::new(5, 0));
        let b = s.find_path(&g, Point::new(0, 3), Point::new(5, 0));
        assert!(a.is_found());
        assert_eq!(a, b);
    }
}
