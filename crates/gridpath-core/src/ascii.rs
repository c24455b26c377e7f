//! Row-by-row parsing of ASCII maps.
//!
//! Maps are written one row per line, one character per cell:
//!
//! ```text
//! ..#..
//! ..#..
//! .....
//! ```
//!
//! Blank lines around the map and whitespace around each row are ignored.
//! Every row must have the same width.

use std::fmt;

use crate::geom::{Point, Range};

/// Errors that can occur when building a grid from an ASCII map or from
/// serialized data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the same width as the first one.
    InconsistentSize { row: i32, expected: i32, found: i32 },
    /// A character the decoder does not know was found.
    InvalidRune { ch: char, pos: Point },
    /// Bounds not anchored at the origin, or a cell count that does not
    /// cover them exactly.
    InvalidShape { bounds: Range, cells: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidShape { bounds, cells } => {
                write!(f, "grid bounds {bounds} do not match {cells} cells")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Decode `s` into its size and a row-major cell vector.
///
/// `decode` maps a character to a cell, returning `None` for characters
/// that are not allowed.
pub fn parse_rows<T>(
    s: &str,
    mut decode: impl FnMut(char) -> Option<T>,
) -> Result<(Point, Vec<T>), GridError> {
    let mut cells = Vec::new();
    let mut w: i32 = -1;
    let mut y: i32 = 0;

    for line in s.trim().lines() {
        let line = line.trim();
        let mut x: i32 = 0;
        for ch in line.chars() {
            let cell = decode(ch).ok_or(GridError::InvalidRune {
                ch,
                pos: Point::new(x, y),
            })?;
            cells.push(cell);
            x += 1;
        }
        if w < 0 {
            w = x;
        } else if x != w {
            return Err(GridError::InconsistentSize {
                row: y,
                expected: w,
                found: x,
            });
        }
        y += 1;
    }

    Ok((Point::new(w.max(0), y), cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(ch: char) -> Option<u32> {
        ch.to_digit(10)
    }

    #[test]
    fn parses_rows_in_order() {
        let (size, cells) = parse_rows("12\n34\n56", digit).unwrap();
        assert_eq!(size, Point::new(2, 3));
        assert_eq!(cells, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        let (size, cells) = parse_rows(
            "
            12
            34
            ",
            digit,
        )
        .unwrap();
        assert_eq!(size, Point::new(2, 2));
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn empty_input() {
        let (size, cells) = parse_rows("  \n ", digit).unwrap();
        assert_eq!(size, Point::ZERO);
        assert!(cells.is_empty());
    }

    #[test]
    fn inconsistent_size_error() {
        let err = parse_rows("12\n345", digit).unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn invalid_rune_error() {
        let err = parse_rows("12\n3x", digit).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }
}
