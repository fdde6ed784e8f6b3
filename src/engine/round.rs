//! The round engine: board ownership, selection processing, win/lose.
//!
//! ## State machine
//!
//! `Setup -> Previewing -> Active -> {Won, Lost}`
//!
//! - `Setup`: no board yet; entered on construction and on restart.
//! - `Previewing`: board dealt face-up; an `EndPreview` deferred action is
//!   parked for the embedder. No selections accepted.
//! - `Active`: normal play per the selection protocol below.
//! - `Won` / `Lost`: terminal; only a new `start_round` leaves them.
//!
//! ## Selection protocol
//!
//! A selection is ignored (no mutation, no event) while the engine is
//! locked, outside `Active`, off the board, on a face-up tile, or on a tile
//! already queued. Otherwise the tile flips face-up and joins the queue;
//! the second accepted pick counts a turn and triggers evaluation. A
//! mismatch parks a `Rehide` deferred action and locks the engine until it
//! fires - the lock is what keeps a third tile out of a pending evaluation.
//!
//! The engine is single-threaded and event-driven: it mutates only inside
//! `select_tile` and `fire_deferred`.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::{generator, Board};
use crate::core::config::RoundConfig;
use crate::core::error::EngineError;
use crate::core::rng::RoundRng;
use crate::core::tile::TilePos;

use super::deferred::{DeferredAction, DeferredKind};
use super::events::{RoundEvent, RoundObserver};
use super::queue::{PairOutcome, SelectionQueue, SelectionResult};
use super::scoring::RoundStats;

/// Where the round currently is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Board not yet generated.
    Setup,
    /// Board dealt face-up, waiting for the preview to end.
    Previewing,
    /// Normal play.
    Active,
    /// All pairs matched.
    Won,
    /// Mismatch budget exhausted.
    Lost,
}

/// Final numbers of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub won: bool,
    pub final_score: u32,
    pub max_combo: u32,
}

/// The round engine.
///
/// Owns the board, the selection queue, and all counters. Constructed
/// explicitly and passed by reference to whichever collaborator needs it -
/// there is no global instance.
#[derive(Debug)]
pub struct RoundEngine {
    config: RoundConfig,
    rng: RoundRng,
    phase: RoundPhase,
    board: Board,
    queue: SelectionQueue,
    stats: RoundStats,
    /// Monotonic round id; stale deferred actions are detected against it.
    generation: u32,
    /// Set while a mismatch re-hide is pending; blocks all selections.
    locked: bool,
    /// The single parked deferred action, if any.
    pending: Option<DeferredAction>,
    events: Vec<RoundEvent>,
}

impl RoundEngine {
    /// Create an engine in `Setup` with the given configuration and seed.
    #[must_use]
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        let stats = RoundStats::new(config.max_mismatch_allowed());
        Self {
            config,
            rng: RoundRng::new(seed),
            phase: RoundPhase::Setup,
            board: Board::empty(),
            queue: SelectionQueue::new(),
            stats,
            generation: 0,
            locked: false,
            pending: None,
            events: Vec::new(),
        }
    }

    /// Rebuild an engine from validated snapshot parts, directly in
    /// `Active` (the preview is not replayed on resume).
    pub(crate) fn from_restored(
        config: RoundConfig,
        seed: u64,
        board: Board,
        selected: &[TilePos],
        stats: RoundStats,
    ) -> Self {
        Self {
            config,
            rng: RoundRng::new(seed),
            phase: RoundPhase::Active,
            board,
            queue: SelectionQueue::from_picks(selected),
            stats,
            generation: 1,
            locked: false,
            pending: None,
            events: Vec::new(),
        }
    }

    // === Accessors ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The active configuration (with clamped/corrected dimensions).
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The board, for rendering. Empty during `Setup`.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Round counters.
    #[must_use]
    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.stats.score()
    }

    /// Completed two-tile evaluations.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.stats.turns()
    }

    /// Positions currently buffered in the selection queue, FIFO.
    #[must_use]
    pub fn selected(&self) -> &[TilePos] {
        self.queue.as_slice()
    }

    /// Is the engine refusing selections while a re-hide is pending?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Monotonic round id, bumped on every deal/restart/restore.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Final numbers, once the round is over.
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        match self.phase {
            RoundPhase::Won | RoundPhase::Lost => Some(RoundSummary {
                won: self.phase == RoundPhase::Won,
                final_score: self.stats.score(),
                max_combo: self.stats.max_combo(),
            }),
            _ => None,
        }
    }

    // === Lifecycle ===

    /// Replace the configuration used by the next `start_round`.
    ///
    /// Returns the stored configuration so the caller can echo the
    /// clamped/corrected dimensions back to the UI. The running round, if
    /// any, is untouched.
    pub fn configure(&mut self, config: RoundConfig) -> &RoundConfig {
        self.config = config;
        &self.config
    }

    /// Deal a new board and enter `Previewing`.
    ///
    /// Fails with `InsufficientSymbols` if the catalog cannot cover the
    /// board; the engine then stays exactly as it was. On success all
    /// counters are zeroed, the generation is bumped (cancelling any
    /// outstanding deferred action from the previous round), and an
    /// `EndPreview` action is parked for the embedder.
    pub fn start_round(&mut self) -> Result<(), EngineError> {
        let board = generator::generate(&self.config, &mut self.rng)?;

        self.generation = self.generation.wrapping_add(1);
        self.board = board;
        self.queue.clear();
        self.stats = RoundStats::new(self.config.max_mismatch_allowed());
        self.locked = false;
        self.phase = RoundPhase::Previewing;
        self.pending = Some(DeferredAction::end_preview(self.generation));

        debug!(
            "round {} dealt: {}x{}, {} pairs, mismatch budget {}",
            self.generation,
            self.config.rows(),
            self.config.columns(),
            self.config.pairs_needed(),
            self.config.max_mismatch_allowed()
        );
        Ok(())
    }

    /// Tear the round down and return to `Setup`.
    ///
    /// Bumps the generation so any still-scheduled timer from the old
    /// round is recognized as stale when it fires.
    pub fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.board = Board::empty();
        self.queue.clear();
        self.stats = RoundStats::new(self.config.max_mismatch_allowed());
        self.locked = false;
        self.phase = RoundPhase::Setup;
        self.pending = None;
        self.events.clear();
        debug!("round torn down, back to setup");
    }

    // === Deferred actions ===

    /// Take the parked deferred action, if any.
    ///
    /// The embedder schedules it on its event loop for
    /// `action.delay_ms()` and hands it back via [`Self::fire_deferred`].
    #[must_use]
    pub fn take_deferred(&mut self) -> Option<DeferredAction> {
        self.pending.take()
    }

    /// Apply a fired deferred action.
    ///
    /// Returns false (and mutates nothing) if the action belongs to a
    /// previous round generation.
    pub fn fire_deferred(&mut self, action: DeferredAction) -> bool {
        if action.generation() != self.generation {
            trace!(
                "dropping stale deferred action from generation {}",
                action.generation()
            );
            return false;
        }

        match action.kind() {
            DeferredKind::EndPreview => {
                if self.phase == RoundPhase::Previewing {
                    self.board.hide_all();
                    for index in 0..self.board.len() {
                        self.events.push(RoundEvent::Flip {
                            position: TilePos::new(index as u16),
                        });
                    }
                    self.phase = RoundPhase::Active;
                    debug!("preview over, round {} active", self.generation);
                }
            }
            DeferredKind::Rehide { first, second } => {
                // Only honored while the lock it scheduled is outstanding;
                // a duplicate fire must not flip matched tiles back down.
                if self.locked {
                    for position in [first, second] {
                        if self.board.tile(position).is_some_and(|t| t.face_up) {
                            self.board.set_face_up(position, false);
                            self.events.push(RoundEvent::Flip { position });
                        }
                    }
                    self.locked = false;
                }
            }
        }
        true
    }

    // === Selection ===

    /// Offer a tile pick to the engine.
    ///
    /// This is the only external mutation path during play. Disallowed
    /// picks return [`SelectionResult::Ignored`] without touching anything;
    /// they are routine, not errors.
    pub fn select_tile(&mut self, position: TilePos) -> SelectionResult {
        if self.phase != RoundPhase::Active || self.locked {
            return SelectionResult::Ignored;
        }

        // A queue restored full from a snapshot holds a pair whose
        // evaluation was re-armed; it runs now, ahead of the new pick.
        if self.queue.is_full() {
            self.evaluate_pair();
            if self.phase != RoundPhase::Active || self.locked {
                return SelectionResult::Ignored;
            }
        }

        let Some(tile) = self.board.tile(position) else {
            trace!("selection off board: {}", position);
            return SelectionResult::Ignored;
        };
        if tile.face_up || self.queue.contains(position) {
            trace!("selection ignored, {} not eligible", position);
            return SelectionResult::Ignored;
        }

        self.board.set_face_up(position, true);
        self.events.push(RoundEvent::Flip { position });
        self.queue.push(position);
        trace!("buffered {}, queue depth {}", position, self.queue.len());

        if self.queue.is_full() {
            // The turn is counted at acceptance of the second pick.
            self.stats.record_turn();
            SelectionResult::Evaluated(self.evaluate_pair())
        } else {
            SelectionResult::Buffered
        }
    }

    /// Evaluate the buffered pair.
    ///
    /// Counters for one evaluation are updated together, before any event
    /// for that evaluation is emitted. The lose check runs on the mismatch
    /// path only - a mismatch can never complete the board.
    fn evaluate_pair(&mut self) -> PairOutcome {
        let (first, second) = self.queue.take_pair();

        if self.board.pair_matches(first, second) {
            let points = self.stats.record_match();
            debug!(
                "match {}/{}: +{} points, combo {}",
                first,
                second,
                points,
                self.stats.combo()
            );

            self.events.push(RoundEvent::Match);
            self.events.push(RoundEvent::ComboChanged {
                combo: self.stats.combo(),
            });
            self.events.push(RoundEvent::ScoreChanged {
                score: self.stats.score(),
            });

            if self.board.all_face_up() {
                self.phase = RoundPhase::Won;
                self.events.push(RoundEvent::RoundEnded {
                    won: true,
                    final_score: self.stats.score(),
                    max_combo: self.stats.max_combo(),
                });
                debug!("round won, final score {}", self.stats.score());
            }
            PairOutcome::Match
        } else {
            let had_combo = self.stats.combo() > 0;
            let lost = self.stats.record_mismatch();
            debug!(
                "mismatch {}/{}: streak {}/{}",
                first,
                second,
                self.stats.mismatch_streak(),
                self.stats.max_mismatch_allowed()
            );

            self.events.push(RoundEvent::Mismatch);
            if had_combo {
                self.events.push(RoundEvent::ComboChanged { combo: 0 });
            }

            // The pair stays revealed until the re-hide fires; the lock
            // keeps further picks out in the meantime.
            self.pending = Some(DeferredAction::rehide(self.generation, first, second));
            self.locked = true;

            if lost {
                self.phase = RoundPhase::Lost;
                self.events.push(RoundEvent::RoundEnded {
                    won: false,
                    final_score: self.stats.score(),
                    max_combo: self.stats.max_combo(),
                });
                debug!("round lost, final score {}", self.stats.score());
            }
            PairOutcome::Mismatch
        }
    }

    // === Events ===

    /// Take all buffered events, in firing order.
    #[must_use]
    pub fn take_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain buffered events into an observer.
    pub fn notify(&mut self, observer: &mut dyn RoundObserver) {
        for event in self.take_events() {
            event.dispatch(observer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::SymbolId;

    fn catalog(n: u16) -> Vec<SymbolId> {
        (0..n).map(SymbolId::new).collect()
    }

    fn engine(rows: usize, columns: usize, seed: u64) -> RoundEngine {
        let config = RoundConfig::new(rows, columns, catalog(32)).unwrap();
        RoundEngine::new(config, seed)
    }

    /// Deal a board and run it through the preview so it is Active.
    fn active_engine(rows: usize, columns: usize, seed: u64) -> RoundEngine {
        let mut engine = engine(rows, columns, seed);
        engine.start_round().unwrap();
        let preview = engine.take_deferred().unwrap();
        assert!(engine.fire_deferred(preview));
        let _ = engine.take_events();
        engine
    }

    /// Positions of one matching pair and of one mismatching pair.
    fn find_pair(engine: &RoundEngine) -> (TilePos, TilePos) {
        let board = engine.board();
        for a in board.iter() {
            for b in board.iter() {
                if a.position != b.position && a.symbol == b.symbol {
                    return (a.position, b.position);
                }
            }
        }
        panic!("board has no pair");
    }

    fn find_mismatch(engine: &RoundEngine) -> (TilePos, TilePos) {
        let board = engine.board();
        for a in board.iter() {
            for b in board.iter() {
                if !a.face_up && !b.face_up && a.symbol != b.symbol {
                    return (a.position, b.position);
                }
            }
        }
        panic!("board has no mismatching pair");
    }

    #[test]
    fn test_new_engine_in_setup() {
        let engine = engine(2, 2, 42);
        assert_eq!(engine.phase(), RoundPhase::Setup);
        assert!(engine.board().is_empty());
        assert_eq!(engine.score(), 0);
        assert!(engine.summary().is_none());
    }

    #[test]
    fn test_start_round_previews_face_up() {
        let mut engine = engine(2, 2, 42);
        engine.start_round().unwrap();

        assert_eq!(engine.phase(), RoundPhase::Previewing);
        assert!(engine.board().all_face_up());
        assert_eq!(engine.generation(), 1);

        let action = engine.take_deferred().unwrap();
        assert_eq!(action.kind(), DeferredKind::EndPreview);
        assert_eq!(action.generation(), 1);
    }

    #[test]
    fn test_no_selection_during_preview() {
        let mut engine = engine(2, 2, 42);
        engine.start_round().unwrap();

        assert_eq!(
            engine.select_tile(TilePos::new(0)),
            SelectionResult::Ignored
        );
    }

    #[test]
    fn test_preview_end_hides_board() {
        let mut engine = engine(2, 2, 42);
        engine.start_round().unwrap();
        let preview = engine.take_deferred().unwrap();

        assert!(engine.fire_deferred(preview));
        assert_eq!(engine.phase(), RoundPhase::Active);
        assert_eq!(engine.board().face_up_count(), 0);

        // One flip event per tile.
        let flips = engine
            .take_events()
            .iter()
            .filter(|e| matches!(e, RoundEvent::Flip { .. }))
            .count();
        assert_eq!(flips, 4);
    }

    #[test]
    fn test_stale_deferred_is_swallowed() {
        let mut engine = engine(2, 2, 42);
        engine.start_round().unwrap();
        let preview = engine.take_deferred().unwrap();

        engine.start_round().unwrap(); // new generation
        assert!(!engine.fire_deferred(preview));
        assert_eq!(engine.phase(), RoundPhase::Previewing);
        assert!(engine.board().all_face_up());
    }

    #[test]
    fn test_restart_cancels_and_resets() {
        let mut engine = active_engine(2, 2, 42);
        let (a, b) = find_mismatch(&engine);
        engine.select_tile(a);
        engine.select_tile(b);
        let rehide = engine.take_deferred().unwrap();

        engine.restart();
        assert_eq!(engine.phase(), RoundPhase::Setup);
        assert!(engine.board().is_empty());
        assert!(!engine.fire_deferred(rehide));
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_first_pick_buffers() {
        let mut engine = active_engine(2, 2, 42);
        let result = engine.select_tile(TilePos::new(0));

        assert_eq!(result, SelectionResult::Buffered);
        assert_eq!(engine.selected(), &[TilePos::new(0)]);
        assert!(engine.board().tile(TilePos::new(0)).unwrap().face_up);
        assert_eq!(engine.turns(), 0);
    }

    #[test]
    fn test_duplicate_pick_ignored() {
        let mut engine = active_engine(2, 2, 42);
        engine.select_tile(TilePos::new(0));

        assert_eq!(
            engine.select_tile(TilePos::new(0)),
            SelectionResult::Ignored
        );
        assert_eq!(engine.selected().len(), 1);
    }

    #[test]
    fn test_off_board_pick_ignored() {
        let mut engine = active_engine(2, 2, 42);
        assert_eq!(
            engine.select_tile(TilePos::new(99)),
            SelectionResult::Ignored
        );
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_match_scores_and_keeps_tiles_up() {
        let mut engine = active_engine(2, 3, 42);
        let (a, b) = find_pair(&engine);

        assert_eq!(engine.select_tile(a), SelectionResult::Buffered);
        assert_eq!(
            engine.select_tile(b),
            SelectionResult::Evaluated(PairOutcome::Match)
        );

        assert_eq!(engine.score(), 15);
        assert_eq!(engine.stats().combo(), 1);
        assert_eq!(engine.turns(), 1);
        assert!(engine.board().tile(a).unwrap().face_up);
        assert!(engine.board().tile(b).unwrap().face_up);
        assert!(!engine.is_locked());
        assert!(engine.take_deferred().is_none());
    }

    #[test]
    fn test_mismatch_locks_until_rehide() {
        let mut engine = active_engine(2, 3, 42);
        let (a, b) = find_mismatch(&engine);

        engine.select_tile(a);
        assert_eq!(
            engine.select_tile(b),
            SelectionResult::Evaluated(PairOutcome::Mismatch)
        );
        assert!(engine.is_locked());
        assert_eq!(engine.stats().mismatch_streak(), 1);
        assert_eq!(engine.turns(), 1);

        // Third pick while locked: ignored.
        let (c, _) = find_mismatch(&engine);
        assert_eq!(engine.select_tile(c), SelectionResult::Ignored);

        // Tiles stay revealed until the re-hide fires.
        assert!(engine.board().tile(a).unwrap().face_up);

        let rehide = engine.take_deferred().unwrap();
        assert!(matches!(rehide.kind(), DeferredKind::Rehide { .. }));
        assert!(engine.fire_deferred(rehide));

        assert!(!engine.is_locked());
        assert!(!engine.board().tile(a).unwrap().face_up);
        assert!(!engine.board().tile(b).unwrap().face_up);
    }

    #[test]
    fn test_event_order_for_match() {
        let mut engine = active_engine(2, 2, 42);
        let (a, b) = find_pair(&engine);
        engine.select_tile(a);
        engine.select_tile(b);

        let events = engine.take_events();
        assert_eq!(events[0], RoundEvent::Flip { position: a });
        assert_eq!(events[1], RoundEvent::Flip { position: b });
        assert_eq!(events[2], RoundEvent::Match);
        assert_eq!(events[3], RoundEvent::ComboChanged { combo: 1 });
        assert_eq!(events[4], RoundEvent::ScoreChanged { score: 15 });
    }

    #[test]
    fn test_win_when_all_pairs_matched() {
        let mut engine = active_engine(2, 2, 42);

        let (a, b) = find_pair(&engine);
        engine.select_tile(a);
        engine.select_tile(b);
        assert_eq!(engine.phase(), RoundPhase::Active);

        // The remaining two tiles are the second pair.
        let remaining: Vec<TilePos> = engine
            .board()
            .iter()
            .filter(|t| !t.face_up)
            .map(|t| t.position)
            .collect();
        assert_eq!(remaining.len(), 2);
        engine.select_tile(remaining[0]);
        engine.select_tile(remaining[1]);

        assert_eq!(engine.phase(), RoundPhase::Won);
        assert_eq!(engine.score(), 35); // 15 + 20
        assert_eq!(
            engine.summary(),
            Some(RoundSummary {
                won: true,
                final_score: 35,
                max_combo: 2,
            })
        );

        let events = engine.take_events();
        assert_eq!(
            events.last(),
            Some(&RoundEvent::RoundEnded {
                won: true,
                final_score: 35,
                max_combo: 2,
            })
        );

        // Terminal: nothing more is accepted.
        assert_eq!(engine.select_tile(a), SelectionResult::Ignored);
    }

    #[test]
    fn test_loss_at_mismatch_budget() {
        let mut engine = active_engine(2, 3, 42);
        let budget = engine.stats().max_mismatch_allowed();
        assert_eq!(budget, 5);

        for i in 0..budget {
            let (a, b) = find_mismatch(&engine);
            engine.select_tile(a);
            assert_eq!(
                engine.select_tile(b),
                SelectionResult::Evaluated(PairOutcome::Mismatch)
            );

            if i + 1 < budget {
                assert_eq!(engine.phase(), RoundPhase::Active);
                let rehide = engine.take_deferred().unwrap();
                engine.fire_deferred(rehide);
            }
        }

        assert_eq!(engine.phase(), RoundPhase::Lost);
        assert_eq!(
            engine.summary(),
            Some(RoundSummary {
                won: false,
                final_score: 0,
                max_combo: 0,
            })
        );

        // The pending re-hide still completes after the loss.
        let rehide = engine.take_deferred().unwrap();
        assert!(engine.fire_deferred(rehide));
        assert_eq!(engine.board().face_up_count(), 0);

        // But no further selection produces anything.
        let _ = engine.take_events();
        assert_eq!(
            engine.select_tile(TilePos::new(0)),
            SelectionResult::Ignored
        );
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_combo_reset_event_only_after_streak() {
        let mut engine = active_engine(2, 3, 42);

        // Mismatch with no combo: no ComboChanged event.
        let (a, b) = find_mismatch(&engine);
        engine.select_tile(a);
        engine.select_tile(b);
        let events = engine.take_events();
        assert!(!events
            .iter()
            .any(|e| matches!(e, RoundEvent::ComboChanged { .. })));

        let rehide = engine.take_deferred().unwrap();
        engine.fire_deferred(rehide);
        let _ = engine.take_events();

        // Match, then mismatch: ComboChanged { 0 } fires.
        let (a, b) = find_pair_face_down(&engine);
        engine.select_tile(a);
        engine.select_tile(b);
        let _ = engine.take_events();

        let (a, b) = find_mismatch(&engine);
        engine.select_tile(a);
        engine.select_tile(b);
        let events = engine.take_events();
        assert!(events.contains(&RoundEvent::ComboChanged { combo: 0 }));
    }

    fn find_pair_face_down(engine: &RoundEngine) -> (TilePos, TilePos) {
        let board = engine.board();
        for a in board.iter() {
            for b in board.iter() {
                if a.position != b.position
                    && !a.face_up
                    && !b.face_up
                    && a.symbol == b.symbol
                {
                    return (a.position, b.position);
                }
            }
        }
        panic!("no face-down pair left");
    }

    #[test]
    fn test_configure_echoes_corrections() {
        let mut engine = engine(2, 2, 42);
        let corrected = engine.configure(RoundConfig::new(3, 3, catalog(32)).unwrap());
        assert_eq!(corrected.columns(), 4);

        engine.start_round().unwrap();
        assert_eq!(engine.board().len(), 12);
    }

    #[test]
    fn test_start_round_failure_leaves_engine_untouched() {
        let config = RoundConfig::new(4, 4, catalog(3)).unwrap();
        let mut engine = RoundEngine::new(config, 42);

        assert!(matches!(
            engine.start_round(),
            Err(EngineError::InsufficientSymbols { .. })
        ));
        assert_eq!(engine.phase(), RoundPhase::Setup);
        assert_eq!(engine.generation(), 0);
        assert!(engine.board().is_empty());
    }

    #[test]
    fn test_notify_dispatches_in_order() {
        struct Counter {
            flips: u32,
            matches: u32,
        }
        impl RoundObserver for Counter {
            fn on_flip(&mut self, _position: TilePos) {
                self.flips += 1;
            }
            fn on_match(&mut self) {
                self.matches += 1;
            }
        }

        let mut engine = active_engine(2, 2, 42);
        let (a, b) = find_pair(&engine);
        engine.select_tile(a);
        engine.select_tile(b);

        let mut counter = Counter {
            flips: 0,
            matches: 0,
        };
        engine.notify(&mut counter);
        assert_eq!(counter.flips, 2);
        assert_eq!(counter.matches, 1);
        assert!(engine.take_events().is_empty());
    }
}
