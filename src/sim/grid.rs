//! Grid geometry and random tile placement
//!
//! Integer tile coordinates, their pixel conversion, and the occupancy set
//! that keeps simultaneously-placed collectibles off each other's tiles.

use std::collections::HashSet;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{X_DIVISION, Y_DIVISION};

/// Integer tile coordinate (column, row). Row -1 is the goal lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub col: i32,
    pub row: i32,
}

impl TilePos {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Pixel position of this tile, shifted by a per-entity-type sprite
    /// alignment offset.
    pub fn to_pixels(self, x_offset: f32, y_offset: f32) -> Vec2 {
        Vec2::new(
            self.col as f32 * X_DIVISION - x_offset,
            self.row as f32 * Y_DIVISION - y_offset,
        )
    }
}

/// Uniform integer draw over `[min, max]` inclusive.
pub fn random_in_range(rng: &mut Pcg32, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Tiles currently reserved by live collectibles.
///
/// Entries are added when a collectible is placed and released on pickup or
/// replacement, so no two live collectibles ever report the same tile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Occupancy {
    tiles: HashSet<TilePos>,
}

impl Occupancy {
    pub fn contains(&self, tile: TilePos) -> bool {
        self.tiles.contains(&tile)
    }

    /// Drop a reservation. Returns false if the tile was not reserved.
    pub fn release(&mut self, tile: TilePos) -> bool {
        self.tiles.remove(&tile)
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Rejection-sample a free tile from the inclusive column/row ranges,
    /// reserve it and return it.
    ///
    /// Does not terminate if every tile in the range is already reserved.
    /// Callers must keep the range strictly larger than the number of live
    /// reservations; in practice at most one gem and one key are ever
    /// concurrently placed over a 5x3 range.
    pub fn place(
        &mut self,
        rng: &mut Pcg32,
        cols: (i32, i32),
        rows: (i32, i32),
    ) -> TilePos {
        loop {
            let tile = TilePos::new(
                random_in_range(rng, cols.0, cols.1),
                random_in_range(rng, rows.0, rows.1),
            );
            if self.tiles.insert(tile) {
                return tile;
            }
        }
    }
}
