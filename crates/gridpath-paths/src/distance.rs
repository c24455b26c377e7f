//! Grid distance metrics.
//!
//! [`octile`] and [`euclidean`] are expressed in tenths of a cell so they
//! line up with [`ORTHOGONAL_COST`] and [`DIAGONAL_COST`].

use gridpath_core::Point;

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: i32 = 10;

/// Cost of a diagonal step, the integer approximation of `10·√2`.
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Cost of the cheapest 8-directional route between two points on an open
/// grid, using [`ORTHOGONAL_COST`] and [`DIAGONAL_COST`].
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diag = dx.min(dy);
    DIAGONAL_COST * diag + ORTHOGONAL_COST * (dx.max(dy) - diag)
}

/// Straight-line distance scaled by 10 and rounded to the nearest integer.
///
/// Not admissible against 14-cost diagonals over long distances; use
/// [`octile`] for search.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    scaled_euclidean(a, b).round() as i32
}

/// Straight-line distance scaled by 10, truncated towards zero.
#[inline]
pub fn euclidean_truncated(a: Point, b: Point) -> i32 {
    scaled_euclidean(a, b) as i32
}

#[inline]
fn scaled_euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt() * 10.0
}
