//! Shared helpers for the tilepath demos: a built-in map, seeded random
//! maps and an ASCII path overlay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath::{BLOCKED_WALK_CODE, Point, WalkabilityGrid};

/// A small hand-drawn map with rooms, corridors and two diagonal gaps
/// meeting at (12, 5).
pub const TOWN: &str = "\
....................
.######.....######..
.#....#.....#....#..
.#....###.###....#..
.#..........#....#..
.######....#.#####..
...........#........
.####.######.######.
.#..................
.#..####....#######.
.#..#..#....#.....#.
....#..#..........#.";

/// A `width` x `height` map where each tile is blocked with probability
/// `blocked`. The same seed always yields the same map.
pub fn random_map(seed: u64, width: u32, height: u32, blocked: f64) -> WalkabilityGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells: Vec<u8> = (0..width * height)
        .map(|_| {
            if rng.random_bool(blocked) {
                BLOCKED_WALK_CODE
            } else {
                1
            }
        })
        .collect();
    // The buffer is built to size, so this cannot fail.
    WalkabilityGrid::new(width, height, &cells).unwrap_or_default()
}

/// First and last walkable tiles in row-major order.
pub fn far_corners(grid: &WalkabilityGrid) -> Option<(Point, Point)> {
    let first = grid.range().iter().find(|&p| grid.is_walkable(p))?;
    let last = grid
        .range()
        .iter()
        .filter(|&p| grid.is_walkable(p))
        .last()?;
    Some((first, last))
}

/// Draw the grid with `path` on top: `#` blocked, `.` walkable, `*` path,
/// `o` origin and `x` destination.
pub fn render_overlay(grid: &WalkabilityGrid, path: &[Point]) -> String {
    let mut rows: Vec<Vec<char>> = (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| {
                    if grid.is_walkable(Point::new(x, y)) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect()
        })
        .collect();

    let mut mark = |p: Point, ch: char| {
        if let Some(cell) = rows
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *cell = ch;
        }
    };
    for &p in path {
        mark(p, '*');
    }
    if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
        mark(first, 'o');
        mark(last, 'x');
    }

    let mut out = String::with_capacity(rows.len() * (grid.width() as usize + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
