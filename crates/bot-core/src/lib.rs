pub mod error;
pub mod time_budget;

pub use error::EngineError;
pub use time_budget::{move_allowance, Clock, MAX_MOVE_ALLOWANCE, MIN_MOVE_ALLOWANCE};

use async_trait::async_trait;
use cozy_chess::{Board, Move};

// =============================================================================
// Engine trait — implemented by every move provider the host can drive
// =============================================================================

/// Outcome of a single move request.
///
/// The adapter family never fills in a ponder move, but the host protocol
/// reserves a slot for one, so it stays in the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    /// The move the engine selected.
    pub best_move: Move,
    /// Predicted reply to think on, if the engine offers one.
    pub ponder: Option<Move>,
}

impl PlayResult {
    pub fn new(best_move: Move) -> Self {
        Self {
            best_move,
            ponder: None,
        }
    }
}

/// Host lifecycle notifications.
///
/// A closed set of events rather than an open-ended dispatch surface: the
/// host can only tell an engine things named here, and engines are free to
/// ignore all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The host issued a go/search command for the current position.
    GoCommand,
    /// The opponent played the move the engine was pondering on.
    PonderHit,
    /// The host wants the current search abandoned.
    Stop,
    /// The opponent offered a draw.
    DrawOffered,
}

/// Trait that all hosted engines implement.
///
/// The host serializes calls: one `search` in flight per match, invoked once
/// per turn with the current position and both sides' clock state.
#[async_trait]
pub trait Engine: Send {
    /// Display name reported to the host.
    fn name(&self) -> &str;

    /// Pick a move for the side to move in `board`.
    ///
    /// Failures surface to the host as-is; engines must not synthesize a
    /// fallback move to mask a broken backend.
    async fn search(&mut self, board: &Board, clock: &Clock) -> Result<PlayResult, EngineError>;

    /// Passive notification sink. Default: ignore everything.
    fn notify(&mut self, _event: EngineEvent) {}

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
