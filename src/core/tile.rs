//! Tiles and their identifiers.
//!
//! A `Tile` is one cell of the board: a stable position, a paired symbol
//! assigned at generation time, and a face-up flag that only the round
//! engine mutates.
//!
//! ## Invariants
//!
//! - Exactly two tiles per round share the same `SymbolId` (perfect pairing).
//! - A tile's symbol never changes after generation.

use serde::{Deserialize, Serialize};

/// Identifier of a paired symbol.
///
/// Symbols are opaque to the engine - the embedder maps them to sprites,
/// glyphs, or whatever the presentation layer draws on a face-up tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A tile's position on the board.
///
/// Positions index the board's ordered tile sequence (row-major) and stay
/// stable for the tile's lifetime within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos(pub u16);

impl TilePos {
    /// Create a new tile position.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw position value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position as a board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for TilePos {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pos({})", self.0)
    }
}

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Stable board position.
    pub position: TilePos,

    /// The paired symbol shown when this tile is face-up.
    pub symbol: SymbolId,

    /// Is this tile currently face-up?
    pub face_up: bool,
}

impl Tile {
    /// Create a face-up tile.
    ///
    /// Generation deals every tile face-up; the engine schedules the
    /// flip-to-hidden at the end of the preview phase.
    #[must_use]
    pub const fn face_up(position: TilePos, symbol: SymbolId) -> Self {
        Self {
            position,
            symbol,
            face_up: true,
        }
    }

    /// Create a face-down tile (used when restoring a snapshot).
    #[must_use]
    pub const fn face_down(position: TilePos, symbol: SymbolId) -> Self {
        Self {
            position,
            symbol,
            face_up: false,
        }
    }
}
