//! Round engine internals: selection, scoring, deferred timing, events.

pub mod deferred;
pub mod events;
pub mod queue;
pub mod round;
pub mod scoring;

pub use deferred::{DeferredAction, DeferredKind, PREVIEW_DELAY_MS, REHIDE_DELAY_MS};
pub use events::{RoundEvent, RoundObserver};
pub use queue::{PairOutcome, SelectionQueue, SelectionResult, SELECTION_CAPACITY};
pub use round::{RoundEngine, RoundPhase, RoundSummary};
pub use scoring::{match_points, RoundStats, COMBO_STEP_POINTS, MATCH_BASE_POINTS};
