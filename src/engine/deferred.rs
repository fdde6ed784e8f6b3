//! Deferred actions: the engine's two suspension points.
//!
//! The engine never blocks and owns no clock. When it needs time to pass -
//! the board preview ending, a mismatched pair flipping back - it parks a
//! single-shot [`DeferredAction`] for the embedder to pick up via
//! `RoundEngine::take_deferred`, schedule on its own event loop for
//! `delay_ms`, and hand back through `RoundEngine::fire_deferred`.
//!
//! Every action is tagged with the round generation it was scheduled under.
//! Restarting or reloading bumps the generation, so a timer that fires
//! after its round was torn down is recognized as stale and swallowed.

use serde::{Deserialize, Serialize};

use crate::core::tile::TilePos;

/// How long the dealt board stays face-up before play begins.
pub const PREVIEW_DELAY_MS: u32 = 3_000;

/// How long a mismatched pair stays revealed before flipping back.
pub const REHIDE_DELAY_MS: u32 = 500;

/// What a deferred action does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredKind {
    /// Flip the whole board face-down and enter `Active`.
    EndPreview,

    /// Flip a mismatched pair back face-down and release the engine lock.
    Rehide { first: TilePos, second: TilePos },
}

/// A cancellable, single-shot action scheduled on the embedder's loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredAction {
    kind: DeferredKind,
    generation: u32,
    delay_ms: u32,
}

impl DeferredAction {
    pub(crate) fn end_preview(generation: u32) -> Self {
        Self {
            kind: DeferredKind::EndPreview,
            generation,
            delay_ms: PREVIEW_DELAY_MS,
        }
    }

    pub(crate) fn rehide(generation: u32, first: TilePos, second: TilePos) -> Self {
        Self {
            kind: DeferredKind::Rehide { first, second },
            generation,
            delay_ms: REHIDE_DELAY_MS,
        }
    }

    /// What this action does.
    #[must_use]
    pub fn kind(&self) -> DeferredKind {
        self.kind
    }

    /// Suggested delay before firing, in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// The round generation this action belongs to.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
