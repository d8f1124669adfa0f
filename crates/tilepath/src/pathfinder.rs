use std::time::{Duration, Instant};

use tilepath_core::Point;

use crate::grid::{GridError, WalkabilityGrid};
use crate::naive::NaiveSearch;
use crate::neighbors::DiagonalRule;
use crate::optimized::OptimizedSearch;
use crate::search::{Algorithm, PathResult, PathSearch, SearchStats};

/// Settings for a [`Pathfinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfinderConfig {
    /// Algorithm used by [`Pathfinder::find_path`].
    pub algorithm: Algorithm,
    /// Diagonal admission for the optimized search. The naive search always
    /// admits diagonals.
    pub diagonal_rule: DiagonalRule,
    /// Measure the wall-clock time of each search.
    pub record_timing: bool,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Optimized,
            diagonal_rule: DiagonalRule::default(),
            record_timing: true,
        }
    }
}

/// Owns a map and both searches, and remembers the most recent result.
///
/// Configure the map once when it loads, then call
/// [`find_path`](Self::find_path) as often as needed. Searches mutate the
/// shared node pool, so a `Pathfinder` serves one request at a time; use one
/// per thread or guard it with a lock.
pub struct Pathfinder {
    config: PathfinderConfig,
    grid: WalkabilityGrid,
    naive: NaiveSearch,
    optimized: OptimizedSearch,
    last_result: PathResult,
    last_stats: Option<SearchStats>,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new(PathfinderConfig::default())
    }
}

impl Pathfinder {
    /// Create a pathfinder with an empty map.
    pub fn new(config: PathfinderConfig) -> Self {
        Self {
            config,
            grid: WalkabilityGrid::default(),
            naive: NaiveSearch::new(),
            optimized: OptimizedSearch::with_rule(config.diagonal_rule),
            last_result: PathResult::NotFound,
            last_stats: None,
        }
    }

    /// Create a pathfinder for `grid`.
    pub fn with_grid(config: PathfinderConfig, grid: WalkabilityGrid) -> Self {
        let mut pf = Self::new(config);
        pf.set_grid(grid);
        pf
    }

    /// Replace the map with `width * height` walk codes.
    ///
    /// On error the previous map stays in place. On success the last result
    /// is cleared, since it referred to the old map.
    pub fn configure(&mut self, width: u32, height: u32, cells: &[u8]) -> Result<(), GridError> {
        self.grid.configure(width, height, cells)?;
        self.clear_last();
        Ok(())
    }

    /// Replace the map with an already built grid.
    pub fn set_grid(&mut self, grid: WalkabilityGrid) {
        log::info!(
            "walkability grid set: {}x{}, {} walkable tiles",
            grid.width(),
            grid.height(),
            grid.walkable_count()
        );
        self.grid = grid;
        self.clear_last();
    }

    #[inline]
    pub fn grid(&self) -> &WalkabilityGrid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> PathfinderConfig {
        self.config
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Switch to the other algorithm and return it.
    pub fn toggle_algorithm(&mut self) -> Algorithm {
        self.config.algorithm = self.config.algorithm.toggle();
        log::debug!("pathfinding algorithm: {}", self.config.algorithm);
        self.config.algorithm
    }

    pub fn set_diagonal_rule(&mut self, rule: DiagonalRule) {
        self.config.diagonal_rule = rule;
        self.optimized.set_rule(rule);
    }

    /// Search with the configured algorithm. The result replaces the
    /// previous one.
    pub fn find_path(&mut self, origin: Point, destination: Point) -> &PathResult {
        self.find_path_with(self.config.algorithm, origin, destination)
    }

    /// Search with a specific algorithm. The result replaces the previous
    /// one.
    pub fn find_path_with(
        &mut self,
        algorithm: Algorithm,
        origin: Point,
        destination: Point,
    ) -> &PathResult {
        let search: &mut dyn PathSearch = match algorithm {
            Algorithm::Naive => &mut self.naive,
            Algorithm::Optimized => &mut self.optimized,
        };

        let start = self.config.record_timing.then(Instant::now);
        let (result, expanded) = search.search(&self.grid, origin, destination);
        let elapsed = start.map_or(Duration::ZERO, |t| t.elapsed());

        match result.steps() {
            Some(steps) => log::debug!(
                "{algorithm} path {origin} -> {destination}: {steps} steps, {expanded} expanded in {elapsed:?}"
            ),
            None => log::debug!(
                "{algorithm} path {origin} -> {destination}: no path, {expanded} expanded in {elapsed:?}"
            ),
        }

        self.last_stats = Some(SearchStats {
            algorithm,
            expanded,
            elapsed,
        });
        self.last_result = result;
        &self.last_result
    }

    /// The most recent result.
    #[inline]
    pub fn last_result(&self) -> &PathResult {
        &self.last_result
    }

    /// Tiles of the most recent path, empty if it found none. Meant for
    /// drawing a path overlay.
    #[inline]
    pub fn last_path(&self) -> &[Point] {
        self.last_result.path()
    }

    /// Statistics of the most recent search.
    #[inline]
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }

    #[inline]
    pub fn is_in_bounds(&self, p: Point) -> bool {
        self.grid.is_in_bounds(p)
    }

    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.grid.is_walkable(p)
    }

    #[inline]
    pub fn tile_at(&self, p: Point) -> u8 {
        self.grid.tile_at(p)
    }

    fn clear_last(&mut self) {
        self.last_result = PathResult::NotFound;
        self.last_stats = None;
    }
}
