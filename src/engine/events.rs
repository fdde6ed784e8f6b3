//! Round events and the typed observer interface.
//!
//! The engine is the only producer and the consumer set is small and fixed
//! (UI, audio), so there is no publish/subscribe bus - just an event enum
//! buffered in firing order, and a [`RoundObserver`] trait with one method
//! per event for collaborators that prefer callbacks.
//!
//! Per evaluation, events fire in this order: flips, then match/mismatch,
//! then combo change, then score change, then round end.

use serde::{Deserialize, Serialize};

use crate::core::tile::TilePos;

/// Something the round engine did that collaborators may react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A tile's face state changed (selection flip-up, preview end,
    /// mismatch re-hide).
    Flip { position: TilePos },

    /// The buffered pair matched.
    Match,

    /// The buffered pair did not match.
    Mismatch,

    /// The combo streak changed.
    ComboChanged { combo: u32 },

    /// The score changed.
    ScoreChanged { score: u32 },

    /// The round reached a terminal state.
    RoundEnded {
        won: bool,
        final_score: u32,
        max_combo: u32,
    },
}

impl RoundEvent {
    /// Forward this event to the matching observer method.
    pub fn dispatch(&self, observer: &mut dyn RoundObserver) {
        match *self {
            RoundEvent::Flip { position } => observer.on_flip(position),
            RoundEvent::Match => observer.on_match(),
            RoundEvent::Mismatch => observer.on_mismatch(),
            RoundEvent::ComboChanged { combo } => observer.on_combo_changed(combo),
            RoundEvent::ScoreChanged { score } => observer.on_score_changed(score),
            RoundEvent::RoundEnded {
                won,
                final_score,
                max_combo,
            } => observer.on_round_ended(won, final_score, max_combo),
        }
    }
}

/// Listener interface for round events.
///
/// All methods default to no-ops; collaborators implement only what they
/// care about (an audio collaborator might implement just `on_flip`,
/// `on_match`, and `on_mismatch`).
pub trait RoundObserver {
    /// A tile flipped at `position`.
    fn on_flip(&mut self, _position: TilePos) {}

    /// The buffered pair matched.
    fn on_match(&mut self) {}

    /// The buffered pair did not match.
    fn on_mismatch(&mut self) {}

    /// The combo streak is now `combo`.
    fn on_combo_changed(&mut self, _combo: u32) {}

    /// The score is now `score`.
    fn on_score_changed(&mut self, _score: u32) {}

    /// The round ended.
    fn on_round_ended(&mut self, _won: bool, _final_score: u32, _max_combo: u32) {}
}
