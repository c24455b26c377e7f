//! Board tiles, the brush that paints them, and the overlay shown to users.

use gridpath_core::CellClass;

/// What the user placed on a board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Space,
    Solid,
    Start,
    End,
}

impl Tile {
    /// How searches see this tile. Only [`Tile::Solid`] blocks.
    #[inline]
    pub const fn class(self) -> CellClass {
        match self {
            Self::Solid => CellClass::Blocked,
            _ => CellClass::Free,
        }
    }

    #[inline]
    pub const fn rune(self) -> char {
        match self {
            Self::Space => '.',
            Self::Solid => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    #[inline]
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Space),
            '#' => Some(Self::Solid),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

/// The tile the user paints with.
///
/// Brushes are ordered; [`next`](Self::next) and [`prev`](Self::prev) stop
/// at the ends instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brush {
    #[default]
    Solid,
    Start,
    End,
}

impl Brush {
    pub const ALL: [Brush; 3] = [Brush::Solid, Brush::Start, Brush::End];

    #[inline]
    pub const fn tile(self) -> Tile {
        match self {
            Self::Solid => Tile::Solid,
            Self::Start => Tile::Start,
            Self::End => Tile::End,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Solid => Self::Start,
            Self::Start | Self::End => Self::End,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::End => Self::Start,
            Self::Start | Self::Solid => Self::Solid,
        }
    }
}

/// What a renderer should show for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overlay {
    Space,
    Solid,
    Start,
    End,
    /// A free cell on the current route.
    Path,
}

impl Overlay {
    #[inline]
    pub const fn rune(self) -> char {
        match self {
            Self::Space => '.',
            Self::Solid => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Path => '*',
        }
    }
}

impl From<Tile> for Overlay {
    fn from(t: Tile) -> Self {
        match t {
            Tile::Space => Self::Space,
            Tile::Solid => Self::Solid,
            Tile::Start => Self::Start,
            Tile::End => Self::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_clamps() {
        assert_eq!(Brush::Solid.prev(), Brush::Solid);
        assert_eq!(Brush::Solid.next(), Brush::Start);
        assert_eq!(Brush::Start.next(), Brush::End);
        assert_eq!(Brush::End.next(), Brush::End);
        assert_eq!(Brush::End.prev(), Brush::Start);
    }

    #[test]
    fn brush_order_matches_all() {
        let mut b = Brush::ALL[0];
        for &expected in &Brush::ALL[1..] {
            b = b.next();
            assert_eq!(b, expected);
        }
    }

    #[test]
    fn only_solid_blocks() {
        assert_eq!(Tile::Solid.class(), CellClass::Blocked);
        for t in [Tile::Space, Tile::Start, Tile::End] {
            assert_eq!(t.class(), CellClass::Free);
        }
    }

    #[test]
    fn tile_runes() {
        for t in [Tile::Space, Tile::Solid, Tile::Start, Tile::End] {
            assert_eq!(Tile::from_rune(t.rune()), Some(t));
            assert_eq!(Overlay::from(t).rune(), t.rune());
        }
        assert_eq!(Tile::from_rune('*'), None);
    }
}
