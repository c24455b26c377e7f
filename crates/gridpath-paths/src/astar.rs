use std::collections::BinaryHeap;

use gridpath_core::{Point, Range};

use crate::path::{Path, PathResult, SearchConfig};
use crate::traits::AstarPather;

const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Unseen,
    Open,
    Closed,
}

#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    state: State,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            state: State::Unseen,
        }
    }
}

/// Open-set entry. Pops by lowest `f`, then lowest `h`, then earliest push.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
    h: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the shortest path from `from` to `to` using A*.
///
/// Only points inside `range` are considered. All search state lives in
/// this call. Endpoints outside `range` yield [`PathResult::NotFound`];
/// checking them against the map is up to the caller (see
/// [`find_path`](crate::find_path)).
///
/// For equal `f`, the node closer to the goal (`h`) is expanded first, then
/// the one discovered first, so results do not depend on hashing.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    range: Range,
    from: Point,
    to: Point,
    config: &SearchConfig,
) -> PathResult {
    let (Some(start_idx), Some(goal_idx)) = (range.index(from), range.index(to)) else {
        return PathResult::NotFound;
    };

    if start_idx == goal_idx {
        return PathResult::Found(Path::new(vec![from], 0, 0));
    }

    let mut nodes = vec![Node::default(); range.len()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    nodes[start_idx].state = State::Open;
    let h = pather.estimate(from, to);
    open.push(NodeRef {
        idx: start_idx,
        f: h,
        h,
        seq,
    });

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        // Skip stale entries.
        if nodes[ci].state != State::Open {
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        if config.max_expansions.is_some_and(|max| expanded >= max) {
            log::trace!("astar {from} -> {to}: gave up after {expanded} expansions");
            return PathResult::Truncated { expanded };
        }

        nodes[ci].state = State::Closed;
        expanded += 1;
        let current_g = nodes[ci].g;
        let current_point = range.point(ci);

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = range.index(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.state == State::Closed {
                continue;
            }
            let tentative_g = current_g + pather.cost(current_point, np);
            if n.state == State::Open && tentative_g >= n.g {
                continue;
            }

            n.g = tentative_g;
            n.parent = ci;
            n.state = State::Open;

            let h = pather.estimate(np, to);
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                f: tentative_g + h,
                h,
                seq,
            });
        }
    };

    if !found {
        log::debug!("astar {from} -> {to}: unreachable ({expanded} expansions)");
        return PathResult::NotFound;
    }

    // Reconstruct path.
    let cost = nodes[goal_idx].g;
    let mut points = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        points.push(range.point(ci));
        ci = nodes[ci].parent;
    }
    points.reverse();

    log::debug!(
        "astar {from} -> {to}: cost {cost}, {} steps, {expanded} expansions",
        points.len() - 1
    );
    PathResult::Found(Path::new(points, cost, expanded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use crate::distance::manhattan;

    /// 4-way pather on an unbounded open plane with unit costs.
    struct Plane;

    impl Pather for Plane {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for d in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
                buf.push(p.shift(d.0, d.1));
            }
        }
    }

    impl WeightedPather for Plane {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    impl AstarPather for Plane {
        fn estimate(&self, from: Point, to: Point) -> i32 {
            manhattan(from, to)
        }
    }

    #[test]
    fn range_limits_the_search() {
        let rng = Range::new(0, 0, 6, 3);
        let r = astar_path(
            &Plane,
            rng,
            Point::new(0, 0),
            Point::new(5, 2),
            &SearchConfig::default(),
        );
        let path = r.into_path().unwrap();
        assert_eq!(path.cost(), 7);
        assert!(path.points().iter().all(|&p| rng.contains(p)));
    }

    #[test]
    fn endpoints_outside_range() {
        let rng = Range::new(0, 0, 3, 3);
        let cfg = SearchConfig::default();
        assert_eq!(
            astar_path(&Plane, rng, Point::new(-1, 0), Point::new(1, 1), &cfg),
            PathResult::NotFound
        );
        assert_eq!(
            astar_path(&Plane, rng, Point::new(1, 1), Point::new(3, 0), &cfg),
            PathResult::NotFound
        );
    }

    #[test]
    fn heap_order() {
        let a = NodeRef { idx: 0, f: 5, h: 3, seq: 0 };
        let b = NodeRef { idx: 1, f: 5, h: 1, seq: 1 };
        let c = NodeRef { idx: 2, f: 5, h: 1, seq: 2 };
        let d = NodeRef { idx: 3, f: 4, h: 4, seq: 3 };
        let mut heap: BinaryHeap<_> = [a, b, c, d].into_iter().collect();
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn zero_cap_truncates_immediately() {
        let r = astar_path(
            &Plane,
            Range::new(0, 0, 4, 4),
            Point::new(0, 0),
            Point::new(3, 3),
            &SearchConfig::default().with_max_expansions(0),
        );
        assert_eq!(r, PathResult::Truncated { expanded: 0 });
    }
}
