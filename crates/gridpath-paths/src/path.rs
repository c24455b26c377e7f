use std::fmt;

use gridpath_core::Point;

/// A route returned by a successful search.
///
/// `points` runs from the start to the end, both included, and every two
/// consecutive points are 8-adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
    expanded: usize,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: i32, expanded: usize) -> Self {
        Self {
            points,
            cost,
            expanded,
        }
    }

    /// The route, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Sum of the step costs along the route.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of nodes the search expanded before reaching the end.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of moves, i.e. one less than the number of points.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Whether the route passes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Outcome of a search whose inputs were valid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// A lowest-cost route.
    Found(Path),
    /// The end is not reachable from the start.
    NotFound,
    /// The search hit [`SearchConfig::max_expansions`] first.
    Truncated { expanded: usize },
}

impl PathResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The route, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Rejected search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// The start is out of bounds or blocked.
    InvalidStart(Point),
    /// The end is out of bounds or blocked.
    InvalidEnd(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart(p) => write!(f, "start {p} is out of bounds or blocked"),
            Self::InvalidEnd(p) => write!(f, "end {p} is out of bounds or blocked"),
        }
    }
}

impl std::error::Error for PathError {}

/// Search tuning.
///
/// The default runs every search to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Give up with [`PathResult::Truncated`] after expanding this many
    /// nodes without reaching the end.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Set the expansion cap (builder).
    #[inline]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
