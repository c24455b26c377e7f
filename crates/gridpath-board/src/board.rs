//! The editable [`Board`].
//!
//! A board holds what the user painted: obstacles, at most one start and at
//! most one end. Whenever both markers are placed, every edit re-runs the
//! search so [`Board::route`] always describes the current tiles.

use std::fmt;

use gridpath_core::{Grid, GridError, Point, Range, ascii};
use gridpath_paths::{PathError, PathResult, SearchConfig, euclidean_truncated, find_path_with};

use crate::tile::{Brush, Overlay, Tile};

/// Board settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Passed to every route search.
    pub search: SearchConfig,
}

/// Distances reported for a single cell, in tenths of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellReport {
    pub pos: Point,
    pub tile: Tile,
    /// Straight-line distance from the start, if placed.
    pub from_start: Option<i32>,
    /// Straight-line distance to the end, if placed.
    pub to_end: Option<i32>,
    /// `from_start + to_end`, if both markers are placed.
    pub f_cost: Option<i32>,
}

/// Errors returned by board edits and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The position is outside the board.
    OutOfBounds(Point),
    /// The text could not be parsed.
    Parse(GridError),
    /// The text contains a second start or end marker.
    DuplicateMarker { tile: Tile, pos: Point },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "{p} is outside the board"),
            Self::Parse(e) => write!(f, "board: {e}"),
            Self::DuplicateMarker { tile, pos } => {
                write!(f, "board: second {tile:?} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for BoardError {
    fn from(e: GridError) -> Self {
        Self::Parse(e)
    }
}

/// An editable grid of [`Tile`]s with an up-to-date route.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    bounds: Range,
    brush: Brush,
    start: Option<Point>,
    end: Option<Point>,
    route: Option<Result<PathResult, PathError>>,
    config: BoardConfig,
}

impl Board {
    /// Create an empty board: every tile is [`Tile::Space`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(width, height, BoardConfig::default())
    }

    pub fn with_config(width: i32, height: i32, config: BoardConfig) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            tiles: vec![Tile::Space; bounds.len()],
            bounds,
            brush: Brush::default(),
            start: None,
            end: None,
            route: None,
            config,
        }
    }

    /// Parse a board from text using [`Tile::rune`] characters.
    ///
    /// At most one `S` and one `E` are allowed. The route is computed if
    /// both are present.
    pub fn from_ascii(s: &str) -> Result<Self, BoardError> {
        let (size, tiles) = ascii::parse_rows(s, Tile::from_rune)?;
        let mut board = Self::new(size.x, size.y);
        for (i, tile) in tiles.into_iter().enumerate() {
            let pos = board.bounds.point(i);
            let marker = match tile {
                Tile::Start => &mut board.start,
                Tile::End => &mut board.end,
                _ => {
                    board.tiles[i] = tile;
                    continue;
                }
            };
            if marker.is_some() {
                return Err(BoardError::DuplicateMarker { tile, pos });
            }
            *marker = Some(pos);
            board.tiles[i] = tile;
        }
        board.refresh();
        Ok(board)
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Change the settings and recompute the route.
    pub fn set_config(&mut self, config: BoardConfig) {
        self.config = config;
        self.refresh();
    }

    /// The tile at `p`, or `None` if `p` is outside the board.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.tiles[i])
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[inline]
    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    /// Select the next brush; stays put on the last one.
    pub fn next_brush(&mut self) -> Brush {
        self.brush = self.brush.next();
        self.brush
    }

    /// Select the previous brush; stays put on the first one.
    pub fn prev_brush(&mut self) -> Brush {
        self.brush = self.brush.prev();
        self.brush
    }

    /// The last search result, or `None` unless both markers are placed.
    #[inline]
    pub fn route(&self) -> Option<&Result<PathResult, PathError>> {
        self.route.as_ref()
    }

    /// Paint the current brush at `p`. See [`place`](Self::place).
    pub fn paint(&mut self, p: Point) -> Result<bool, BoardError> {
        self.place(p, self.brush.tile())
    }

    /// Put `tile` at `p`.
    ///
    /// Placing a start while one is already on the board (or an end while
    /// one is already on the board) does nothing and returns `Ok(false)`;
    /// erase the old marker first. Overwriting a marker removes it.
    pub fn place(&mut self, p: Point, tile: Tile) -> Result<bool, BoardError> {
        let i = self.bounds.index(p).ok_or(BoardError::OutOfBounds(p))?;
        match tile {
            Tile::Start if self.start.is_some() => return Ok(false),
            Tile::End if self.end.is_some() => return Ok(false),
            _ => {}
        }
        self.put(i, p, tile);
        self.refresh();
        Ok(true)
    }

    /// Reset `p` to [`Tile::Space`], removing any marker there.
    pub fn erase(&mut self, p: Point) -> Result<(), BoardError> {
        let i = self.bounds.index(p).ok_or(BoardError::OutOfBounds(p))?;
        self.put(i, p, Tile::Space);
        self.refresh();
        Ok(())
    }

    /// Reset every tile to [`Tile::Space`]. The brush is kept.
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Space);
        self.start = None;
        self.end = None;
        self.route = None;
    }

    /// The search input for the current tiles.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new(self.bounds.width(), self.bounds.height());
        for (p, tile) in self.bounds.iter().zip(&self.tiles) {
            grid.set(p, tile.class());
        }
        grid
    }

    /// What to draw at `p`, or `None` if `p` is outside the board.
    pub fn overlay(&self, p: Point) -> Option<Overlay> {
        let tile = self.tile(p)?;
        if tile == Tile::Space && self.on_route(p) {
            return Some(Overlay::Path);
        }
        Some(tile.into())
    }

    /// Distances from the markers to `p`, or `None` if `p` is outside the
    /// board.
    pub fn inspect(&self, p: Point) -> Option<CellReport> {
        let tile = self.tile(p)?;
        let from_start = self.start.map(|s| euclidean_truncated(s, p));
        let to_end = self.end.map(|e| euclidean_truncated(e, p));
        let f_cost = sum_distances(from_start, to_end);
        Some(CellReport {
            pos: p,
            tile,
            from_start,
            to_end,
            f_cost,
        })
    }

    fn on_route(&self, p: Point) -> bool {
        matches!(&self.route, Some(Ok(PathResult::Found(path))) if path.contains(p))
    }

    fn put(&mut self, i: usize, p: Point, tile: Tile) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        match tile {
            Tile::Start => self.start = Some(p),
            Tile::End => self.end = Some(p),
            _ => {}
        }
        self.tiles[i] = tile;
    }

    fn refresh(&mut self) {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            self.route = None;
            return;
        };
        let route = find_path_with(&self.grid(), start, end, &self.config.search);
        match &route {
            Ok(PathResult::Found(path)) => {
                log::debug!("board: route {start} -> {end}, cost {}", path.cost())
            }
            Ok(other) => log::debug!("board: no route {start} -> {end}: {other:?}"),
            Err(e) => log::debug!("board: {e}"),
        }
        self.route = Some(route);
    }
}

fn sum_distances(from_start: Option<i32>, to_end: Option<i32>) -> Option<i32> {
    from_start.zip(to_end).map(|(a, b)| a.saturating_add(b))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.bounds {
            if p.x == self.bounds.min.x && p.y != self.bounds.min.y {
                writeln!(f)?;
            }
            let overlay = self.overlay(p).unwrap_or(Overlay::Space);
            write!(f, "{}", overlay.rune())?;
        }
        Ok(())
    }
}
