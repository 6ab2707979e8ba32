//! Error taxonomy shared by all engine backends.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Why a move request failed.
///
/// Both variants are terminal for the affected move: there is no retry layer
/// here, and no default move is ever substituted. The host decides what a
/// failed move request means for the game.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine process could not be started, crashed, exited non-zero,
    /// produced no output, or blew through its deadline.
    #[error("engine process failed: {reason}")]
    Process {
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    /// The engine's first output line is not a coordinate-notation move.
    #[error("engine replied with unparseable move {line:?}")]
    MoveParse { line: String },
}

impl EngineError {
    /// Process failure without an underlying I/O cause.
    pub fn process(reason: impl Into<String>) -> Self {
        Self::Process {
            reason: reason.into(),
            source: None,
        }
    }

    /// The executable itself could not be launched.
    pub fn spawn(command: &Path, source: io::Error) -> Self {
        Self::Process {
            reason: format!("failed to launch {}", command.display()),
            source: Some(source),
        }
    }
}
