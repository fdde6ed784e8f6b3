//! Board generation.
//!
//! Builds a shuffled set of paired tiles for the configured dimensions:
//!
//! 1. De-duplicate the symbol catalog (first occurrence wins).
//! 2. Pick `tile_count / 2` distinct symbols by shuffling the distinct set.
//! 3. Duplicate each picked symbol once to form pairs.
//! 4. Shuffle the combined multiset and assign to positions `0..n`.
//!
//! Tiles come out face-up: the engine shows the full board during the
//! preview phase and schedules the flip-to-hidden itself.

use rustc_hash::FxHashSet;

use crate::core::config::RoundConfig;
use crate::core::error::EngineError;
use crate::core::rng::RoundRng;
use crate::core::tile::{SymbolId, Tile, TilePos};

use super::Board;

/// Generate a board for the given configuration.
///
/// Fails with `InsufficientSymbols` if the catalog holds fewer distinct
/// symbols than the board needs pairs.
///
/// Postcondition: every symbol on the generated board appears exactly
/// twice, and every tile is face-up.
pub fn generate(config: &RoundConfig, rng: &mut RoundRng) -> Result<Board, EngineError> {
    let needed = config.pairs_needed();

    let mut seen = FxHashSet::default();
    let mut distinct: Vec<SymbolId> = config
        .catalog()
        .iter()
        .copied()
        .filter(|s| seen.insert(*s))
        .collect();

    if distinct.len() < needed {
        return Err(EngineError::InsufficientSymbols {
            needed,
            available: distinct.len(),
        });
    }

    // Random subset policy: shuffle the distinct set, take the prefix.
    rng.shuffle(&mut distinct);
    distinct.truncate(needed);

    let mut symbols = distinct.clone();
    symbols.extend_from_slice(&distinct);
    rng.shuffle(&mut symbols);

    let tiles = symbols
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Tile::face_up(TilePos::new(i as u16), symbol))
        .collect();

    Ok(Board::new(config.rows(), config.columns(), tiles))
}
