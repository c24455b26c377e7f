//! The [`CellClass`] type: what a search may do with a grid cell.

/// Classification of a single grid cell as seen by path searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellClass {
    /// Walkable.
    #[default]
    Free,
    /// Obstacle; never part of a path.
    Blocked,
}

impl CellClass {
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Text form used by [`Grid::parse`](crate::Grid::parse): `.` free, `#` blocked.
    #[inline]
    pub const fn rune(self) -> char {
        match self {
            Self::Free => '.',
            Self::Blocked => '#',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    #[inline]
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '#' => Some(Self::Blocked),
            _ => None,
        }
    }
}
