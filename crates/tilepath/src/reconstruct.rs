use tilepath_core::Point;

/// Walk parent links back from `goal` and return the tiles in
/// origin-to-goal order.
///
/// `link` maps a node key to its tile and its parent key. The chain must
/// end at a node with no parent.
pub fn reconstruct<K: Copy>(goal: K, link: impl Fn(K) -> (Point, Option<K>)) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(k) = cur {
        let (p, parent) = link(k);
        path.push(p);
        cur = parent;
    }
    path.reverse();
    path
}
