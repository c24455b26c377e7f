//! Path searches on a [`Grid`] of [`CellClass`](gridpath_core::CellClass) values.
//!
//! Movement is 8-directional: orthogonal steps cost
//! [`ORTHOGONAL_COST`](crate::ORTHOGONAL_COST), diagonal steps
//! [`DIAGONAL_COST`](crate::DIAGONAL_COST). A diagonal step between two
//! blocked orthogonal cells is allowed, matching plain 8-connectivity.

use gridpath_core::{Grid, Point};

use crate::astar::astar_path;
use crate::distance::{self, DIAGONAL_COST, ORTHOGONAL_COST};
use crate::path::{PathError, PathResult, SearchConfig};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts a [`Grid`] to the pather traits: free cells are walkable, step
/// costs are 10/14 and the estimate is the octile distance.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_8().into_iter().filter(|&n| self.grid.is_free(n)));
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        if from.is_diagonal(to) {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        distance::octile(from, to)
    }
}

/// Find the lowest-cost path from `start` to `end` on `grid`.
///
/// Returns [`PathError`] if either endpoint is out of bounds or blocked
/// (the start is checked first). Otherwise the result is
/// [`PathResult::Found`] or [`PathResult::NotFound`]; the grid is never
/// modified.
pub fn find_path(grid: &Grid, start: Point, end: Point) -> Result<PathResult, PathError> {
    find_path_with(grid, start, end, &SearchConfig::default())
}

/// Like [`find_path`], with an explicit [`SearchConfig`].
pub fn find_path_with(
    grid: &Grid,
    start: Point,
    end: Point,
    config: &SearchConfig,
) -> Result<PathResult, PathError> {
    if !grid.is_free(start) {
        return Err(PathError::InvalidStart(start));
    }
    if !grid.is_free(end) {
        return Err(PathError::InvalidEnd(end));
    }
    Ok(astar_path(
        &GridPather::new(grid),
        grid.bounds(),
        start,
        end,
        config,
    ))
}


#[cfg(test)]
mod random_tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use gridpath_core::CellClass;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;

    /// Plain Dijkstra over the same move set, as a reference for costs.
    fn reference_cost(grid: &Grid, start: Point, end: Point) -> Option<i32> {
        let rng = grid.bounds();
        let mut dist = vec![i32::MAX; rng.len()];
        let mut heap = BinaryHeap::new();
        let si = rng.index(start)?;
        dist[si] = 0;
        heap.push(Reverse((0, si)));
        while let Some(Reverse((d, i))) = heap.pop() {
            if d > dist[i] {
                continue;
            }
            let cp = rng.point(i);
            if cp == end {
                return Some(d);
            }
            for n in cp.neighbors_8() {
                if !grid.is_free(n) {
                    continue;
                }
                let Some(ni) = rng.index(n) else { continue };
                let nd = d + if cp.is_diagonal(n) { 14 } else { 10 };
                if nd < dist[ni] {
                    dist[ni] = nd;
                    heap.push(Reverse((nd, ni)));
                }
            }
        }
        None
    }

    fn random_grid(rng: &mut StdRng, w: i32, h: i32, density: f64) -> Grid {
        let mut grid = Grid::new(w, h);
        for p in grid.bounds() {
            if rng.random_bool(density) {
                grid.set(p, CellClass::Blocked);
            }
        }
        grid
    }

    #[test]
    fn matches_reference_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..200 {
            let w = rng.random_range(1..16);
            let h = rng.random_range(1..16);
            let mut grid = random_grid(&mut rng, w, h, 0.35);
            let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            let end = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            grid.set(start, CellClass::Free);
            grid.set(end, CellClass::Free);

            let result = find_path(&grid, start, end).unwrap();
            match (reference_cost(&grid, start, end), result) {
                (Some(cost), PathResult::Found(path)) => {
                    assert_eq!(path.cost(), cost, "round {round}:\n{grid}");
                    assert_eq!(path.points().first(), Some(&start));
                    assert_eq!(path.points().last(), Some(&end));
                    assert!(path.points().iter().all(|&q| grid.is_free(q)));
                    assert!(path.points().windows(2).all(|w| w[0].is_adjacent(w[1])));
                }
                (None, PathResult::NotFound) => {}
                (expected, got) => {
                    panic!("round {round}: reference {expected:?}, got {got:?}\n{grid}")
                }
            }
        }
    }
}
