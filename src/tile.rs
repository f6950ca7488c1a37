use serde::{Deserialize, Serialize};

/// Static terrain of a single map cell.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize,
)]
#[serde(try_from = "char", into = "char")]
pub enum MapTile {
    #[default]
    Wall,
    Floor,
}

use MapTile::*;

impl MapTile {
    pub fn is_walkable(self) -> bool {
        matches!(self, Floor)
    }

    pub fn blocks_sight(self) -> bool {
        matches!(self, Wall)
    }
}

impl TryFrom<char> for MapTile {
    type Error = &'static str;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Floor),
            '#' => Ok(Wall),
            _ => Err("invalid terrain char"),
        }
    }
}

impl From<MapTile> for char {
    fn from(val: MapTile) -> Self {
        match val {
            Floor => '.',
            Wall => '#',
        }
    }
}
