//! **gridpath-core**: core types for grid pathfinding.
//!
//! This crate provides the foundational types shared by the *gridpath*
//! crates: geometry primitives, cell classifications, an owned grid, and
//! the ASCII map format used to write grids down as text.

pub mod ascii;
pub mod cell;
pub mod geom;
pub mod grid;

pub use ascii::GridError;
pub use cell::CellClass;
pub use geom::{Point, Range};
pub use grid::Grid;
