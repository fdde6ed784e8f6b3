//! The selection queue: a bounded pending-pick buffer.
//!
//! The player's picks accumulate here two at a time; once full, the engine
//! drains the pair in FIFO order and evaluates it. The engine rejects
//! duplicates and ineligible tiles before anything reaches the queue, so
//! the queue itself only enforces capacity.

use smallvec::SmallVec;

use crate::core::tile::TilePos;

/// How many picks the queue buffers before evaluation triggers.
pub const SELECTION_CAPACITY: usize = 2;

/// Result of offering a tile to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionResult {
    /// The selection was disallowed and nothing changed.
    ///
    /// Raised for: locked engine, non-Active phase, off-board position,
    /// already face-up tile, or a tile already in the queue.
    Ignored,

    /// The tile was flipped face-up and buffered as the first pick.
    Buffered,

    /// The tile completed a pair and the pair was evaluated.
    Evaluated(PairOutcome),
}

/// Outcome of evaluating a buffered pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// Same symbol - tiles stay face-up permanently.
    Match,
    /// Different symbols - tiles get scheduled to flip back.
    Mismatch,
}

/// FIFO buffer of pending picks, capacity [`SELECTION_CAPACITY`].
#[derive(Clone, Debug, Default)]
pub struct SelectionQueue {
    picks: SmallVec<[TilePos; SELECTION_CAPACITY]>,
}

impl SelectionQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a queue from persisted picks (snapshot restore).
    pub(crate) fn from_picks(picks: &[TilePos]) -> Self {
        debug_assert!(picks.len() <= SELECTION_CAPACITY);
        Self {
            picks: SmallVec::from_slice(picks),
        }
    }

    /// Number of buffered picks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Is the queue empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Is the queue full (evaluation due)?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.picks.len() >= SELECTION_CAPACITY
    }

    /// Is this position already buffered?
    #[must_use]
    pub fn contains(&self, position: TilePos) -> bool {
        self.picks.contains(&position)
    }

    /// Buffered picks in FIFO order.
    #[must_use]
    pub fn as_slice(&self) -> &[TilePos] {
        &self.picks
    }

    /// Buffer a pick.
    pub(crate) fn push(&mut self, position: TilePos) {
        debug_assert!(!self.is_full(), "selection queue overflow");
        debug_assert!(!self.contains(position), "duplicate selection queued");
        self.picks.push(position);
    }

    /// Drain the buffered pair in FIFO order.
    pub(crate) fn take_pair(&mut self) -> (TilePos, TilePos) {
        debug_assert!(self.is_full());
        let second = self.picks.pop().unwrap_or(TilePos::new(0));
        let first = self.picks.pop().unwrap_or(TilePos::new(0));
        (first, second)
    }

    /// Drop all buffered picks.
    pub(crate) fn clear(&mut self) {
        self.picks.clear();
    }
}
