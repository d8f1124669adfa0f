//! A* pathfinding on tile grids.
//!
//! A [`WalkabilityGrid`] classifies each tile by a one-byte walk code. Two
//! A* implementations search it for a shortest 8-directional route:
//!
//! - **[`NaiveSearch`]**: the list-based reference, with linear scans over
//!   the open and closed sets.
//! - **[`OptimizedSearch`]**: a preallocated [`NodePool`], a binary-heap open
//!   set and per-node membership flags. It also refuses to cut corners (see
//!   [`DiagonalRule`]).
//!
//! [`Pathfinder`] owns a grid and both searches, selects one per request and
//! keeps the most recent [`PathResult`] for overlay drawing.
//!
//! Costs are integers: a cardinal step costs [`CARDINAL_COST`], a diagonal
//! step [`DIAGONAL_COST`], and the [`octile`] heuristic never overestimates
//! them.
//!
//! ```
//! use tilepath::{Pathfinder, PathfinderConfig, Point};
//!
//! let mut pf = Pathfinder::new(PathfinderConfig::default());
//! pf.configure(5, 5, &[1; 25]).unwrap();
//! let path = pf.find_path(Point::new(0, 0), Point::new(4, 4));
//! assert_eq!(path.steps(), Some(4));
//! ```

mod cost;
mod grid;
mod naive;
mod neighbors;
mod optimized;
mod pathfinder;
mod pool;
mod reconstruct;
mod search;

pub use cost::{CARDINAL_COST, Cost, DIAGONAL_COST, octile, path_cost, step_cost};
pub use grid::{BLOCKED_WALK_CODE, GridError, INVALID_WALK_CODE, WalkabilityGrid};
pub use naive::NaiveSearch;
pub use neighbors::{DiagonalRule, Neighbors, SEARCH_ORDER};
pub use optimized::OptimizedSearch;
pub use pathfinder::{Pathfinder, PathfinderConfig};
pub use pool::{NodePool, SearchNode, UNVISITED};
pub use reconstruct::reconstruct;
pub use search::{Algorithm, PathResult, PathSearch, SearchStats};
pub use tilepath_core::{Point, Range};
