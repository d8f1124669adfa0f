//! Step costs and the octile heuristic.
//!
//! Costs are integers in tenths of a tile so that a diagonal step
//! approximates `√2` without floating point.

use tilepath_core::Point;

/// Accumulated path cost, in tenths of a tile.
pub type Cost = i32;

/// Cost of a horizontal or vertical step.
pub const CARDINAL_COST: Cost = 10;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: Cost = 14;

/// Cost of moving between two adjacent tiles.
#[inline]
pub fn step_cost(from: Point, to: Point) -> Cost {
    debug_assert!(from.is_adjacent(to), "step between {from} and {to}");
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

/// Octile distance: the cost of the cheapest 8-directional route on an
/// open grid. Never exceeds the true cost under [`step_cost`].
#[inline]
pub fn octile(a: Point, b: Point) -> Cost {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    CARDINAL_COST * dx.max(dy) + (DIAGONAL_COST - CARDINAL_COST) * dx.min(dy)
}

/// Total cost of walking `path` step by step.
pub fn path_cost(path: &[Point]) -> Cost {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_is_dearer_but_shorter_than_two_cardinals() {
        assert!(DIAGONAL_COST >= CARDINAL_COST);
        assert!(DIAGONAL_COST < 2 * CARDINAL_COST);
    }

    #[test]
    fn step_costs() {
        let p = Point::new(2, 2);
        assert_eq!(step_cost(p, Point::new(2, 1)), CARDINAL_COST);
        assert_eq!(step_cost(p, Point::new(1, 2)), CARDINAL_COST);
        assert_eq!(step_cost(p, Point::new(3, 3)), DIAGONAL_COST);
        assert_eq!(step_cost(p, Point::new(1, 3)), DIAGONAL_COST);
    }

    #[test]
    fn octile_matches_open_grid_cost() {
        let o = Point::ZERO;
        assert_eq!(octile(o, o), 0);
        assert_eq!(octile(o, Point::new(4, 4)), 4 * DIAGONAL_COST);
        assert_eq!(octile(o, Point::new(5, 0)), 5 * CARDINAL_COST);
        assert_eq!(
            octile(o, Point::new(3, -1)),
            DIAGONAL_COST + 2 * CARDINAL_COST
        );
        assert_eq!(octile(Point::new(3, 7), o), octile(o, Point::new(3, 7)));
    }

    #[test]
    fn octile_is_consistent() {
        // h(a) <= c(a, b) + h(b) for every neighbour b of a.
        let goal = Point::new(7, -3);
        for y in -5..5 {
            for x in -5..10 {
                let a = Point::new(x, y);
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let b = a.shift(dx, dy);
                        assert!(octile(a, goal) <= step_cost(a, b) + octile(b, goal));
                    }
                }
            }
        }
    }

    #[test]
    fn cost_of_path() {
        let path = [
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        assert_eq!(path_cost(&path), DIAGONAL_COST + 2 * CARDINAL_COST);
        assert_eq!(path_cost(&path[..1]), 0);
        assert_eq!(path_cost(&[]), 0);
    }
}
