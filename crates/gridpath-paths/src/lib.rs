//! A* pathfinding over 8-connected cell grids.
//!
//! The entry point is [`find_path`]: given a [`Grid`](gridpath_core::Grid)
//! of free and blocked cells, a start and an end, it returns the
//! lowest-cost route or reports that none exists. Orthogonal steps cost
//! [`ORTHOGONAL_COST`], diagonal steps [`DIAGONAL_COST`].
//!
//! All search state is local to one call, so any number of searches may run
//! at once on a shared grid.
//!
//! # Trait hierarchy
//!
//! [`astar_path`] runs on anything implementing [`AstarPather`];
//! [`GridPather`] is the implementation used by [`find_path`].
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbours |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate |

mod astar;
mod distance;
mod engine;
mod path;
mod traits;

pub use astar::astar_path;
pub use distance::{
    DIAGONAL_COST, ORTHOGONAL_COST, chebyshev, euclidean, euclidean_truncated, manhattan, octile,
};
pub use engine::{GridPather, find_path, find_path_with};
pub use path::{Path, PathError, PathResult, SearchConfig};
pub use traits::{AstarPather, Pather, WeightedPather};
