//! The [`Grid`] type: a fixed-size 2D map of [`CellClass`] values.
//!
//! A `Grid` owns its cells. Searches only ever borrow it immutably, so a
//! single grid can be shared between threads while several searches run.

use std::fmt;

use crate::ascii::{self, GridError};
use crate::cell::CellClass;
use crate::geom::{Point, Range};

/// A rectangular grid of [`CellClass`] values covering
/// `[0, width) × [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<CellClass>,
    bounds: Range,
}

/// Unchecked serialized form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<CellClass>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        Self::from_cells(repr.bounds, repr.cells)
    }
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell free.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, CellClass::Free)
    }

    /// Create a new grid of the given dimensions filled with `class`.
    pub fn filled(width: i32, height: i32, class: CellClass) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            cells: vec![class; bounds.len()],
            bounds,
        }
    }

    /// Parse a grid from text: `.` is free, `#` is blocked.
    ///
    /// See [`ascii`](crate::ascii) for the layout rules.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let (size, cells) = ascii::parse_rows(s, CellClass::from_rune)?;
        Ok(Self {
            cells,
            bounds: Range::with_size(size.x, size.y),
        })
    }

    /// Build a grid from `bounds` and row-major `cells`.
    ///
    /// `bounds` must start at the origin and `cells` must hold exactly one
    /// entry per cell in it.
    pub fn from_cells(bounds: Range, cells: Vec<CellClass>) -> Result<Self, GridError> {
        let anchored = Range::with_size(bounds.max.x, bounds.max.y);
        if bounds != anchored || cells.len() != bounds.len() {
            return Err(GridError::InvalidShape {
                bounds,
                cells: cells.len(),
            });
        }
        Ok(Self { cells, bounds })
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The class of the cell at `p`, or `None` if `p` is out of range.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellClass> {
        self.bounds.index(p).and_then(|i| self.cells.get(i).copied())
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellClass::is_free)
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is
    /// outside the grid.
    pub fn set(&mut self, p: Point, class: CellClass) -> bool {
        match self.bounds.index(p).and_then(|i| self.cells.get_mut(i)) {
            Some(cell) => {
                *cell = class;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `class`.
    pub fn fill(&mut self, class: CellClass) {
        self.cells.fill(class);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }

    /// Row-major iterator over `(Point, CellClass)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellClass)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, class) in self.iter() {
            if p.x == self.bounds.min.x && p.y != self.bounds.min.y {
                writeln!(f)?;
            }
            write!(f, "{}", class.rune())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.at(Point::new(0, 0)), Some(CellClass::Free));
        assert_eq!(g.at(Point::new(3, 2)), Some(CellClass::Free));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn grid_set_and_get() {
        let mut g = Grid::new(4, 3);
        assert!(g.set(Point::new(2, 1), CellClass::Blocked));
        assert_eq!(g.at(Point::new(2, 1)), Some(CellClass::Blocked));
        assert!(!g.is_free(Point::new(2, 1)));
        // out of bounds is ignored
        assert!(!g.set(Point::new(10, 10), CellClass::Blocked));
        assert_eq!(g.blocked_count(), 1);
    }

    #[test]
    fn grid_fill() {
        let mut g = Grid::new(3, 2);
        g.fill(CellClass::Blocked);
        assert!(g.iter().all(|(_, c)| c == CellClass::Blocked));
        assert_eq!(g.blocked_count(), 6);
    }

    #[test]
    fn negative_size_is_empty() {
        let g = Grid::new(-2, 5);
        assert!(g.bounds().is_empty());
        assert_eq!(g.at(Point::ZERO), None);
    }

    #[test]
    fn parse_and_display() {
        let text = "..#\n#..";
        let g = Grid::parse(text).unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::new(2, 0)), Some(CellClass::Blocked));
        assert_eq!(g.at(Point::new(0, 1)), Some(CellClass::Blocked));
        assert_eq!(g.at(Point::new(1, 1)), Some(CellClass::Free));
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn parse_rejects_unknown_rune() {
        assert!(matches!(
            Grid::parse("..\n.S"),
            Err(GridError::InvalidRune { ch: 'S', .. })
        ));
    }

    #[test]
    fn from_cells_checks_shape() {
        let cells = vec![CellClass::Free, CellClass::Blocked];
        let g = Grid::from_cells(Range::with_size(2, 1), cells.clone()).unwrap();
        assert_eq!(g.to_string(), ".#");

        assert_eq!(
            Grid::from_cells(Range::with_size(3, 3), cells.clone()),
            Err(GridError::InvalidShape {
                bounds: Range::with_size(3, 3),
                cells: 2,
            })
        );
        let shifted = Range::new(1, 0, 3, 1);
        assert!(matches!(
            Grid::from_cells(shifted, cells),
            Err(GridError::InvalidShape { .. })
        ));
    }

    #[test]
    fn grid_is_send_and_sync() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Grid>();
    }
}
