//! Scoring and round counters.
//!
//! The formula: a match is worth `10 + 5 * combo`, where `combo` is the
//! consecutive-match streak length including the match being scored. A
//! mismatch zeroes the combo and grows the mismatch streak; the streak
//! reaching `rows + columns` loses the round.
//!
//! All counter mutation funnels through [`RoundStats::record_match`] /
//! [`RoundStats::record_mismatch`] so an evaluation updates every counter
//! together, before any event is emitted.

use serde::{Deserialize, Serialize};

/// Base points for any match.
pub const MATCH_BASE_POINTS: u32 = 10;

/// Additional points per combo step.
pub const COMBO_STEP_POINTS: u32 = 5;

/// Points awarded for a match at the given combo length.
///
/// `combo` counts the match being scored: the first match of a streak
/// scores `10 + 5 * 1 = 15`.
#[must_use]
pub fn match_points(combo: u32) -> u32 {
    MATCH_BASE_POINTS + COMBO_STEP_POINTS * combo
}

/// The scored, evaluated aggregate of a round.
///
/// `score` is monotonically non-decreasing within a round; everything is
/// zeroed at round setup or explicit restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    score: u32,
    turns: u32,
    combo: u32,
    max_combo: u32,
    mismatch_streak: u32,
    max_mismatch_allowed: u32,
}

impl RoundStats {
    /// Fresh counters for a round with the given mismatch budget.
    #[must_use]
    pub(crate) fn new(max_mismatch_allowed: u32) -> Self {
        Self {
            score: 0,
            turns: 0,
            combo: 0,
            max_combo: 0,
            mismatch_streak: 0,
            max_mismatch_allowed,
        }
    }

    /// Rebuild counters from a snapshot. `turns` is not persisted and
    /// restarts at zero.
    pub(crate) fn restored(
        score: u32,
        combo: u32,
        max_combo: u32,
        mismatch_streak: u32,
        max_mismatch_allowed: u32,
    ) -> Self {
        Self {
            score,
            turns: 0,
            combo,
            max_combo,
            mismatch_streak,
            max_mismatch_allowed,
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Completed two-tile evaluations.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Current consecutive-match streak.
    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// High-water mark of the combo within this round.
    #[must_use]
    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Current consecutive-mismatch streak.
    #[must_use]
    pub fn mismatch_streak(&self) -> u32 {
        self.mismatch_streak
    }

    /// Mismatch budget for this round (`rows + columns`).
    #[must_use]
    pub fn max_mismatch_allowed(&self) -> u32 {
        self.max_mismatch_allowed
    }

    /// Count a completed two-tile selection.
    ///
    /// Recorded when the second tile is accepted into the queue, not when
    /// its evaluation finishes.
    pub(crate) fn record_turn(&mut self) {
        self.turns += 1;
    }

    /// Apply a match: extend the combo, award points, clear the mismatch
    /// streak. Returns the points awarded.
    pub(crate) fn record_match(&mut self) -> u32 {
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        self.mismatch_streak = 0;
        let points = match_points(self.combo);
        self.score += points;
        points
    }

    /// Apply a mismatch: zero the combo, grow the streak. Returns true if
    /// the streak reached the budget and the round is lost.
    pub(crate) fn record_mismatch(&mut self) -> bool {
        self.combo = 0;
        self.mismatch_streak += 1;
        self.mismatch_streak >= self.max_mismatch_allowed
    }
}
