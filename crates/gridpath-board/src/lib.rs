//! Editing model for an interactive pathfinding board.
//!
//! A [`Board`] tracks the tiles a user paints (obstacles, one start, one
//! end) and the brush they paint with, and keeps an A* route between the
//! markers current after every edit. Front ends read
//! [`Board::overlay`] to decide what to draw; nothing here draws or polls
//! input.

pub mod board;
pub mod tile;

pub use board::{Board, BoardConfig, BoardError, CellReport};
pub use tile::{Brush, Overlay, Tile};
