//! # pairmatch
//!
//! A deterministic round engine for tile-pair memory matching games.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine owns board state, selection,
//!    scoring, and win/lose - never rendering, input devices, or audio.
//!    Embedders observe [`RoundEvent`]s and draw whatever they like.
//!
//! 2. **No Clock Inside**: The engine never blocks or sleeps. When time
//!    must pass (the deal preview ending, a mismatched pair flipping
//!    back), it parks a [`DeferredAction`] for the embedder to schedule
//!    and fire back. Round generations make late timers harmless.
//!
//! 3. **Deterministic**: All randomness flows through a seeded
//!    [`RoundRng`]. Same seed and same inputs, same round.
//!
//! ## Modules
//!
//! - `core`: Symbol/position newtypes, configuration, RNG, errors
//! - `board`: The tile board and the paired-deal generator
//! - `engine`: The round state machine, selection queue, scoring, events
//! - `snapshot`: Mid-round save records and the byte codec
//!
//! ## A round, end to end
//!
//! ```
//! use pairmatch::{RoundConfig, RoundEngine, RoundPhase, SymbolId};
//!
//! let catalog: Vec<SymbolId> = (0..10).map(SymbolId::new).collect();
//! let config = RoundConfig::new(2, 2, catalog)?;
//! let mut engine = RoundEngine::new(config, 42);
//!
//! engine.start_round()?;
//! assert_eq!(engine.phase(), RoundPhase::Previewing);
//!
//! // The embedder schedules this for action.delay_ms() on its own loop;
//! // here we fire it immediately.
//! let preview = engine.take_deferred().unwrap();
//! engine.fire_deferred(preview);
//! assert_eq!(engine.phase(), RoundPhase::Active);
//!
//! // Play proceeds through engine.select_tile(..) until the phase
//! // reaches RoundPhase::Won or RoundPhase::Lost.
//! # Ok::<(), pairmatch::EngineError>(())
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    EngineError, RoundConfig, RoundRng, SymbolId, Tile, TilePos, MAX_COLUMNS, MAX_ROWS,
};

pub use crate::board::{generator, Board};

pub use crate::engine::{
    match_points, DeferredAction, DeferredKind, PairOutcome, RoundEngine, RoundEvent,
    RoundObserver, RoundPhase, RoundStats, RoundSummary, SelectionQueue, SelectionResult,
    COMBO_STEP_POINTS, MATCH_BASE_POINTS, PREVIEW_DELAY_MS, REHIDE_DELAY_MS,
    SELECTION_CAPACITY,
};

pub use crate::snapshot::{RoundSnapshot, TileRecord};
