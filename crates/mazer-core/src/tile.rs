//! The [`Tile`] type: the occupancy state of one grid cell.

use crate::grid::GridError;

/// Occupancy of a single cell.
///
/// On the wire a tile is the integer `0` (open) or `1` (wall).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Whether the tile can be walked through.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Integer encoding: 0 for open, 1 for wall.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Wall => 1,
        }
    }

    /// Decode the integer encoding.
    pub fn from_value(v: i64) -> Result<Self, GridError> {
        match v {
            0 => Ok(Self::Open),
            1 => Ok(Self::Wall),
            other => Err(GridError::InvalidTile(other)),
        }
    }

    /// Character used by the text renderer.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Tile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tile {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = <i64 as serde::Deserialize>::deserialize(deserializer)?;
        Tile::from_value(v).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding() {
        assert_eq!(Tile::Open.value(), 0);
        assert_eq!(Tile::Wall.value(), 1);
        assert_eq!(Tile::from_value(1).unwrap(), Tile::Wall);
        assert!(matches!(Tile::from_value(2), Err(GridError::InvalidTile(2))));
    }

    #[test]
    fn default_is_open() {
        assert!(Tile::default().is_open());
        assert!(!Tile::Wall.is_open());
        assert_eq!(Tile::Wall.glyph(), '#');
    }
}
