//! Reference A* over plain lists.
//!
//! The open and closed sets are unindexed `Vec`s: finding the best open node
//! and every membership test is a linear scan. This is the baseline that
//! [`OptimizedSearch`](crate::OptimizedSearch) is measured against.
//!
//! Diagonal steps are always admitted, including between two blocked
//! tiles. That is a known simplification of this variant.

use tilepath_core::Point;

use crate::cost::{Cost, octile, step_cost};
use crate::grid::WalkabilityGrid;
use crate::neighbors::{DiagonalRule, Neighbors};
use crate::reconstruct::reconstruct;
use crate::search::{Algorithm, PathResult, PathSearch};

#[derive(Debug, Clone, Copy)]
struct ListNode {
    pos: Point,
    g: Cost,
    h: Cost,
    /// Index into the closed list.
    parent: Option<usize>,
    seq: u64,
}

impl ListNode {
    fn key(&self) -> (Cost, Cost, u64) {
        (self.g + self.h, self.h, self.seq)
    }
}

/// List-based A*. Allocates its lists afresh for every search.
#[derive(Default)]
pub struct NaiveSearch {
    neighbors: Neighbors,
}

impl NaiveSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathSearch for NaiveSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Naive
    }

    fn search(
        &mut self,
        grid: &WalkabilityGrid,
        origin: Point,
        destination: Point,
    ) -> (PathResult, usize) {
        if !grid.is_walkable(origin) || !grid.is_walkable(destination) {
            log::trace!("naive: blocked endpoint {origin} -> {destination}");
            return (PathResult::NotFound, 0);
        }
        if origin == destination {
            return (PathResult::Found(vec![origin]), 0);
        }

        let mut open = vec![ListNode {
            pos: origin,
            g: 0,
            h: octile(origin, destination),
            parent: None,
            seq: 0,
        }];
        let mut closed: Vec<ListNode> = Vec::new();
        let mut seq = 1;

        while let Some(best) = lowest_score(&open) {
            let current = open.swap_remove(best);
            let ci = closed.len();
            closed.push(current);

            if current.pos == destination {
                let path = reconstruct(ci, |i| (closed[i].pos, closed[i].parent));
                return (PathResult::Found(path), closed.len());
            }

            for &np in self.neighbors.walkable(grid, current.pos, DiagonalRule::Always) {
                if closed.iter().any(|n| n.pos == np) {
                    continue;
                }
                let g = current.g + step_cost(current.pos, np);
                if let Some(n) = open.iter_mut().find(|n| n.pos == np) {
                    if g < n.g {
                        n.g = g;
                        n.parent = Some(ci);
                    }
                    continue;
                }
                open.push(ListNode {
                    pos: np,
                    g,
                    h: octile(np, destination),
                    parent: Some(ci),
                    seq,
                });
                seq += 1;
            }
        }

        (PathResult::NotFound, closed.len())
    }
}

/// Position of the open node with the lowest score, then lowest `h`, then
/// earliest insertion.
fn lowest_score(open: &[ListNode]) -> Option<usize> {
    open.iter()
        .enumerate()
        .min_by_key(|(_, n)| n.key())
        .map(|(i, _)| i)
}
