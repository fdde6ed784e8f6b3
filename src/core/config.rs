//! Round configuration.
//!
//! The embedder configures a round by giving row/column dimensions and a
//! symbol catalog. Construction is where all the silent corrections live:
//!
//! - rows and columns are independently clamped to [`MAX_ROWS`] /
//!   [`MAX_COLUMNS`];
//! - an odd `rows * columns` product gets `columns` incremented by one
//!   (never rows), so the board always holds whole pairs.
//!
//! Both corrections are observable through the accessors - the UI is
//! expected to echo the values it actually got.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::tile::SymbolId;

/// Maximum number of board rows.
pub const MAX_ROWS: usize = 6;

/// Maximum number of board columns.
pub const MAX_COLUMNS: usize = 7;

/// Validated round configuration.
///
/// Dimensions held here are already clamped and evened; every derived
/// quantity (`tile_count`, `pairs_needed`, `max_mismatch_allowed`) is
/// computed from the corrected values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    rows: usize,
    columns: usize,
    catalog: Vec<SymbolId>,
}

impl RoundConfig {
    /// Create a configuration, applying clamping and even-product correction.
    ///
    /// Fails with `InvalidDimensions` if either dimension is zero. The
    /// symbol catalog is accepted as-is; whether it can cover the board is
    /// checked at generation time (`InsufficientSymbols`).
    ///
    /// The even-product correction runs after clamping and may push
    /// `columns` one past [`MAX_COLUMNS`]; a whole-pair board takes
    /// precedence over the clamp.
    pub fn new(
        rows: usize,
        columns: usize,
        catalog: Vec<SymbolId>,
    ) -> Result<Self, EngineError> {
        if rows == 0 || columns == 0 {
            return Err(EngineError::InvalidDimensions { rows, columns });
        }

        let rows = rows.min(MAX_ROWS);
        let mut columns = columns.min(MAX_COLUMNS);
        if (rows * columns) % 2 != 0 {
            columns += 1;
        }

        Ok(Self {
            rows,
            columns,
            catalog,
        })
    }

    /// Rebuild a configuration from already-normalized dimensions.
    ///
    /// Snapshot restore goes through here: the stored dimensions were
    /// corrected when the round was first configured, and re-clamping could
    /// alter a column count the correction legitimately pushed past the max.
    pub(crate) fn restored(rows: usize, columns: usize, catalog: Vec<SymbolId>) -> Self {
        Self {
            rows,
            columns,
            catalog,
        }
    }

    /// Corrected row count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Corrected column count.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total tiles on the board (always even).
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Distinct symbols a board of this size needs.
    #[must_use]
    pub fn pairs_needed(&self) -> usize {
        self.tile_count() / 2
    }

    /// Consecutive mismatches that end the round in a loss.
    ///
    /// Derived from the corrected dimensions and constant for the round.
    #[must_use]
    pub fn max_mismatch_allowed(&self) -> u32 {
        (self.rows + self.columns) as u32
    }

    /// The symbol catalog.
    #[must_use]
    pub fn catalog(&self) -> &[SymbolId] {
        &self.catalog
    }
}
