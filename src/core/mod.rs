//! Core engine types: tiles, RNG, configuration, errors.
//!
//! These are the building blocks the board generator and round engine are
//! assembled from; none of them carries game-flow logic of its own.

pub mod config;
pub mod error;
pub mod rng;
pub mod tile;

pub use config::{RoundConfig, MAX_COLUMNS, MAX_ROWS};
pub use error::EngineError;
pub use rng::RoundRng;
pub use tile::{SymbolId, Tile, TilePos};
