//! Snapshot capture, validation, and the byte codec.
//!
//! A [`RoundSnapshot`] is a flat record of everything a mid-round save
//! needs: counters, dimensions, per-tile symbol and face state, and the
//! pending selection queue. It deliberately omits `turns` (a restored
//! round restarts its turn count) and any timing state - deferred actions
//! are not persisted, and a snapshot restores straight into active play
//! with no preview.
//!
//! Storage is the embedder's problem; the engine only defines the record
//! and its byte round-trip. The byte format (bincode) is opaque to callers
//! and carries no version header, so it is a save slot, not an archival
//! format.
//!
//! Restore validates before building anything. A snapshot whose tiles do
//! not pair up cleanly, or whose selection list is inconsistent with its
//! tiles, is rejected with [`EngineError::CorruptSnapshot`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::config::RoundConfig;
use crate::core::error::EngineError;
use crate::core::tile::{SymbolId, Tile, TilePos};
use crate::engine::queue::SELECTION_CAPACITY;
use crate::engine::round::RoundEngine;
use crate::engine::scoring::RoundStats;

/// One tile's persisted state. Position is implicit in record order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub symbol: SymbolId,
    pub face_up: bool,
}

/// A complete mid-round save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub score: u32,
    pub rows: u16,
    pub columns: u16,
    pub combo: u32,
    pub max_combo: u32,
    pub mismatch_streak: u32,
    /// Tiles in position order, row-major.
    pub tiles: Vec<TileRecord>,
    /// The selection queue, FIFO, at most two entries.
    pub selected: Vec<TilePos>,
}

impl RoundSnapshot {
    /// Capture the engine's current round.
    ///
    /// Meaningful while a round is in play; capturing a `Setup` engine
    /// yields an empty tile list that `restore` will reject.
    #[must_use]
    pub fn capture(engine: &RoundEngine) -> Self {
        let board = engine.board();
        let stats = engine.stats();
        Self {
            score: stats.score(),
            rows: board.rows() as u16,
            columns: board.columns() as u16,
            combo: stats.combo(),
            max_combo: stats.max_combo(),
            mismatch_streak: stats.mismatch_streak(),
            tiles: board
                .iter()
                .map(|t| TileRecord {
                    symbol: t.symbol,
                    face_up: t.face_up,
                })
                .collect(),
            selected: engine.selected().to_vec(),
        }
    }

    /// Check the record's internal consistency.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(EngineError::corrupt("zero board dimension"));
        }
        let expected = self.rows as usize * self.columns as usize;
        if self.tiles.len() != expected {
            return Err(EngineError::corrupt(format!(
                "tile count {} does not match {}x{} board",
                self.tiles.len(),
                self.rows,
                self.columns
            )));
        }

        // Every symbol must appear exactly twice; anything else means the
        // record was not produced by a paired deal.
        let mut counts: FxHashMap<SymbolId, u32> = FxHashMap::default();
        for record in &self.tiles {
            *counts.entry(record.symbol).or_insert(0) += 1;
        }
        if let Some((symbol, count)) = counts.iter().find(|(_, &c)| c != 2) {
            return Err(EngineError::corrupt(format!(
                "{} appears {} times, expected exactly 2",
                symbol, count
            )));
        }

        if self.selected.len() > SELECTION_CAPACITY {
            return Err(EngineError::corrupt(format!(
                "{} queued selections, capacity is {}",
                self.selected.len(),
                SELECTION_CAPACITY
            )));
        }
        for (i, &position) in self.selected.iter().enumerate() {
            let Some(record) = self.tiles.get(position.index()) else {
                return Err(EngineError::corrupt(format!(
                    "queued selection {} is off the board",
                    position
                )));
            };
            if !record.face_up {
                return Err(EngineError::corrupt(format!(
                    "queued selection {} is recorded face-down",
                    position
                )));
            }
            if self.selected[..i].contains(&position) {
                return Err(EngineError::corrupt(format!(
                    "queued selection {} appears twice",
                    position
                )));
            }
        }
        Ok(())
    }

    /// Rebuild a live engine from this record.
    ///
    /// The engine comes back in active play with the selection queue
    /// re-populated; a queue restored full is evaluated at the head of the
    /// next `select_tile` call. The seed feeds the round's fresh RNG (the
    /// original stream position is not persisted).
    pub fn restore(&self, seed: u64) -> Result<RoundEngine, EngineError> {
        self.validate()?;

        let rows = self.rows as usize;
        let columns = self.columns as usize;

        // The restored catalog is the board's own symbol set; the original
        // full catalog is not persisted and only matters to the next deal.
        let mut catalog: Vec<SymbolId> = Vec::with_capacity(self.tiles.len() / 2);
        for record in &self.tiles {
            if !catalog.contains(&record.symbol) {
                catalog.push(record.symbol);
            }
        }
        let config = RoundConfig::restored(rows, columns, catalog);

        let tiles: Vec<Tile> = self
            .tiles
            .iter()
            .enumerate()
            .map(|(index, record)| Tile {
                position: TilePos::new(index as u16),
                symbol: record.symbol,
                face_up: record.face_up,
            })
            .collect();
        let board = Board::new(rows, columns, tiles);

        let stats = RoundStats::restored(
            self.score,
            self.combo,
            self.max_combo,
            self.mismatch_streak,
            config.max_mismatch_allowed(),
        );

        Ok(RoundEngine::from_restored(
            config,
            seed,
            board,
            &self.selected,
            stats,
        ))
    }

    /// Encode to the opaque byte format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::corrupt(e.to_string()))
    }

    /// Decode from the opaque byte format and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| EngineError::corrupt(format!("undecodable snapshot: {}", e)))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

impl RoundEngine {
    /// Capture the current round as a [`RoundSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::capture(self)
    }
}
