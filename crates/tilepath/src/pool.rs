use std::cmp::Ordering;

use tilepath_core::{Point, Range};

use crate::cost::Cost;

/// Sentinel `g`/`h` of a node not yet reached by the current search.
pub const UNVISITED: Cost = Cost::MAX;

// ---------------------------------------------------------------------------
// Search node
// ---------------------------------------------------------------------------

/// Per-tile search state. The tile itself is implied by the node's index in
/// its [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// Cost of the best known path from the origin.
    pub g: Cost,
    /// Heuristic estimate to the destination.
    pub h: Cost,
    /// Pool index of the predecessor on the best known path.
    pub parent: Option<usize>,
    pub in_open: bool,
    pub in_closed: bool,
}

impl SearchNode {
    /// A node untouched by the current search.
    pub const UNVISITED: Self = Self {
        g: UNVISITED,
        h: UNVISITED,
        parent: None,
        in_open: false,
        in_closed: false,
    };

    /// `g + h`.
    #[inline]
    pub fn score(&self) -> Cost {
        self.g.saturating_add(self.h)
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.in_open || self.in_closed
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self::UNVISITED
    }
}

// ---------------------------------------------------------------------------
// Open-set entry
// ---------------------------------------------------------------------------

/// Heap entry for a node, ordered so that `BinaryHeap` pops the lowest
/// score first, then the lowest `h`, then the earliest insertion.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) score: Cost,
    pub(crate) h: Cost,
    pub(crate) seq: u64,
    /// `g` at push time; an entry whose node has since improved is stale.
    pub(crate) g: Cost,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the best entry first.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NodePool
// ---------------------------------------------------------------------------

/// One [`SearchNode`] per grid tile, allocated once and reused by every
/// search.
///
/// Nodes are reset, never freed, so a search performs no per-node
/// allocation. Parent links are pool indices and stay valid across resets.
#[derive(Debug, Clone, Default)]
pub struct NodePool {
    rng: Range,
    nodes: Vec<SearchNode>,
}

impl NodePool {
    /// Create a pool covering `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![SearchNode::UNVISITED; rng.len()],
        }
    }

    /// Make the pool cover `rng`, reusing the existing allocation when it is
    /// large enough.
    pub fn fit(&mut self, rng: Range) {
        if self.rng == rng {
            return;
        }
        let len = rng.len();
        self.rng = rng;
        if len <= self.nodes.capacity() {
            self.nodes.truncate(len);
            self.nodes.resize(len, SearchNode::UNVISITED);
            return;
        }
        log::debug!("node pool grows to {} nodes for {}", len, rng);
        self.nodes.clear();
        self.nodes.resize(len, SearchNode::UNVISITED);
    }

    /// Return every node to the unvisited state.
    pub fn reset(&mut self) {
        self.nodes.fill(SearchNode::UNVISITED);
    }

    /// The range of tiles covered.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pool index of the node for tile `(x, y)`, or `None` outside the pool.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.rng.index_of(Point::new(x, y))
    }

    /// The node for tile `(x, y)`.
    #[inline]
    pub fn get_node(&mut self, x: i32, y: i32) -> Option<&mut SearchNode> {
        let i = self.index(x, y)?;
        Some(&mut self.nodes[i])
    }

    /// The tile of the node at `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }

    #[inline]
    pub fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    #[inline]
    pub fn node_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn one_node_per_tile() {
        let mut pool = NodePool::new(Range::with_size(4, 3));
        assert_eq!(pool.len(), 12);
        assert_eq!(pool.index(0, 0), Some(0));
        assert_eq!(pool.index(3, 2), Some(11));
        assert_eq!(pool.index(4, 0), None);
        assert_eq!(pool.index(-1, 1), None);
        assert_eq!(pool.point(6), Point::new(2, 1));

        pool.get_node(2, 1).unwrap().g = 7;
        assert_eq!(pool.node(6).g, 7);
        assert!(pool.get_node(9, 9).is_none());
    }

    #[test]
    fn reset_clears_search_state() {
        let mut pool = NodePool::new(Range::with_size(3, 3));
        {
            let n = pool.node_mut(4);
            n.g = 10;
            n.h = 20;
            n.parent = Some(1);
            n.in_open = true;
        }
        pool.node_mut(1).in_closed = true;
        pool.reset();
        assert!((0..pool.len()).all(|i| *pool.node(i) == SearchNode::UNVISITED));
    }

    #[test]
    fn fit_smaller_preserves_capacity() {
        let mut pool = NodePool::new(Range::with_size(20, 20));
        let cap = pool.nodes.capacity();
        pool.fit(Range::with_size(5, 5));
        assert_eq!(pool.len(), 25);
        assert_eq!(pool.nodes.capacity(), cap);
        assert_eq!(pool.index(4, 4), Some(24));
    }

    #[test]
    fn fit_larger_reallocates() {
        let mut pool = NodePool::new(Range::with_size(5, 5));
        pool.fit(Range::with_size(20, 20));
        assert_eq!(pool.len(), 400);
        assert_eq!(pool.range(), Range::with_size(20, 20));
    }

    #[test]
    fn unvisited_score_does_not_overflow() {
        assert_eq!(SearchNode::UNVISITED.score(), UNVISITED);
        assert!(!SearchNode::UNVISITED.is_visited());
    }

    #[test]
    fn heap_order() {
        let e = |idx, score, h, seq| OpenEntry {
            idx,
            score,
            h,
            seq,
            g: score - h,
        };
        let mut heap = BinaryHeap::new();
        heap.push(e(0, 50, 10, 0));
        heap.push(e(1, 40, 30, 1));
        heap.push(e(2, 40, 20, 2));
        heap.push(e(3, 40, 20, 3));
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}
