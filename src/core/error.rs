//! Engine error taxonomy.
//!
//! Only two things are genuinely fatal to the engine: a malformed
//! configuration and corrupt persisted data. Both leave prior valid state
//! untouched - the caller decides whether to retry or start fresh.
//!
//! Disallowed selections are NOT errors: player input races against engine
//! state all the time, so the engine answers them with
//! `SelectionResult::Ignored` instead.

use thiserror::Error;

/// Errors surfaced by the round engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rows or columns outside the valid range.
    ///
    /// Raised at configuration time; the round stays in `Setup`.
    #[error("invalid dimensions: {rows} rows x {columns} columns (both must be at least 1)")]
    InvalidDimensions { rows: usize, columns: usize },

    /// The symbol catalog cannot cover the board.
    ///
    /// Raised at board generation; the round stays in `Setup`.
    #[error("insufficient symbols: board needs {needed} distinct symbols, catalog provides {available}")]
    InsufficientSymbols { needed: usize, available: usize },

    /// Persisted round data failed validation or decoding.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

impl EngineError {
    /// Build a `CorruptSnapshot` from any displayable reason.
    #[must_use]
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptSnapshot(reason.into())
    }
}
