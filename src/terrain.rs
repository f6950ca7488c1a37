use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Static tile grid of the game map.
///
/// Allocated once at map creation with every cell defaulting to wall.
/// There is no mutation API beyond initial authoring with [`Terrain::set`]
/// or parsing an ASCII map.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Terrain {
    width: i32,
    height: i32,
    tiles: Vec<MapTile>,
}

impl Terrain {
    pub fn new(width: i32, height: i32) -> Terrain {
        assert!(width > 0 && height > 0, "Terrain: degenerate size");
        Terrain {
            width,
            height,
            tiles: vec![MapTile::default(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, p: IVec2) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Tile at an in-bounds cell.
    ///
    /// Querying out of bounds is a caller bug, callers are expected to
    /// check `in_bounds` first.
    pub fn tile(&self, p: IVec2) -> MapTile {
        assert!(self.in_bounds(p), "Terrain: out of bounds access at {p}");
        self.tiles[(p.y * self.width + p.x) as usize]
    }

    pub fn is_walkable(&self, p: IVec2) -> bool {
        self.tile(p).is_walkable()
    }

    pub fn is_transparent(&self, p: IVec2) -> bool {
        !self.tile(p).blocks_sight()
    }

    /// Author a cell. Only meant for map construction.
    pub fn set(&mut self, p: IVec2, tile: MapTile) {
        assert!(self.in_bounds(p), "Terrain: out of bounds access at {p}");
        self.tiles[(p.y * self.width + p.x) as usize] = tile;
    }
}

impl FromStr for Terrain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> =
            s.lines().map(str::trim).filter(|a| !a.is_empty()).collect();
        if rows.is_empty() {
            bail!("empty terrain");
        }

        let width = rows[0].chars().count();
        let mut ret = Terrain::new(width as i32, rows.len() as i32);

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                bail!("ragged terrain row {y}");
            }
            for (x, c) in row.chars().enumerate() {
                let tile = match MapTile::try_from(c) {
                    Ok(t) => t,
                    Err(e) => bail!("{e} {c:?} at ({x}, {y})"),
                };
                ret.set(ivec2(x as i32, y as i32), tile);
            }
        }

        Ok(ret)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", char::from(self.tile(ivec2(x, y))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
