//! The board: an ordered sequence of paired tiles.
//!
//! The board is owned exclusively by the round engine. Everything outside
//! the engine reads tiles by position (for rendering); all mutation funnels
//! through crate-private methods the engine drives.

pub mod generator;

use serde::{Deserialize, Serialize};

use crate::core::tile::{Tile, TilePos};

/// A rectangular board of tiles, stored row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Assemble a board from generated tiles.
    pub(crate) fn new(rows: usize, columns: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), rows * columns);
        Self {
            rows,
            columns,
            tiles,
        }
    }

    /// An empty board (round not yet dealt).
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Row count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True before the round is dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by position.
    #[must_use]
    pub fn tile(&self, position: TilePos) -> Option<&Tile> {
        self.tiles.get(position.index())
    }

    /// Is this position on the board?
    #[must_use]
    pub fn contains(&self, position: TilePos) -> bool {
        position.index() < self.tiles.len()
    }

    /// Iterate over all tiles in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Are all tiles face-up? (The win condition.)
    #[must_use]
    pub fn all_face_up(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(|t| t.face_up)
    }

    /// Number of face-up tiles.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.face_up).count()
    }

    /// Do two positions carry the same symbol?
    #[must_use]
    pub fn pair_matches(&self, first: TilePos, second: TilePos) -> bool {
        match (self.tile(first), self.tile(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        }
    }

    /// Set a tile's face state. Returns false if the position is off-board.
    pub(crate) fn set_face_up(&mut self, position: TilePos, face_up: bool) -> bool {
        match self.tiles.get_mut(position.index()) {
            Some(tile) => {
                tile.face_up = face_up;
                true
            }
            None => false,
        }
    }

    /// Flip every tile face-down (end of the preview phase).
    pub(crate) fn hide_all(&mut self) {
        for tile in &mut self.tiles {
            tile.face_up = false;
        }
    }
}
