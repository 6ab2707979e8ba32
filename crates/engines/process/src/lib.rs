//! Engine backend driven over a one-shot subprocess.
//!
//! Each move request spawns `<command> [args..] --time <secs> --position
//! <fen>`, waits for the process to exit under an enforced deadline, reads
//! the first line it printed and decodes that as a coordinate-notation move.
//! The process is trusted to do its own searching and to respect the time
//! budget it was handed; the deadline only exists so a wedged binary cannot
//! stall the whole match.
//!
//! Arguments are always passed as a vector, never through a shell, so a
//! hostile FEN string stays an argument.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use bot_core::{move_allowance, Clock, Engine, EngineError, EngineEvent, PlayResult};
use cozy_chess::{Board, Move};
use serde::Deserialize;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

/// Wall-clock slack on top of the per-move allowance before the process is
/// force-killed. Covers startup overhead of a well-behaved engine.
const DEFAULT_GRACE_MS: u64 = 500;

/// Host-supplied configuration for one external engine.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessEngineConfig {
    /// Path to the engine executable.
    pub command: PathBuf,
    /// Fixed arguments placed before the per-move ones.
    #[serde(default)]
    pub args: Vec<String>,
    /// Display name. Defaults to the executable's file stem.
    #[serde(default)]
    pub name: Option<String>,
    /// Slack beyond the allowance before the process is killed.
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,
}

fn default_grace_ms() -> u64 {
    DEFAULT_GRACE_MS
}

impl ProcessEngineConfig {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            name: None,
            grace_ms: DEFAULT_GRACE_MS,
        }
    }

    /// Parse a config from its TOML form.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// An [`Engine`] that delegates every move to an external process.
///
/// Stateless between calls: one process per move request, no retry, no
/// caching. A failed request surfaces as [`EngineError`] and is never
/// papered over with a substitute move.
pub struct ProcessEngine {
    config: ProcessEngineConfig,
    name: String,
}

impl ProcessEngine {
    pub fn new(config: ProcessEngineConfig) -> Self {
        let name = match &config.name {
            Some(name) => name.clone(),
            None => config
                .command
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("process-engine")
                .to_string(),
        };
        Self { config, name }
    }

    /// Per-move argument vector: fixed args first, then the time budget in
    /// seconds and the position FEN.
    fn move_request_args(&self, allowance: Duration, fen: &str) -> Vec<OsString> {
        let mut argv: Vec<OsString> = self.config.args.iter().map(OsString::from).collect();
        argv.push("--time".into());
        argv.push(allowance.as_secs_f64().to_string().into());
        argv.push("--position".into());
        argv.push(fen.into());
        argv
    }

    /// Run the engine once and return the first line it printed.
    async fn request_move(&self, allowance: Duration, fen: &str) -> Result<String, EngineError> {
        let argv = self.move_request_args(allowance, fen);
        debug!(
            engine = %self.name,
            time_s = allowance.as_secs_f64(),
            "requesting move"
        );

        let child = Command::new(&self.config.command)
            .args(&argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::spawn(&self.config.command, source))?;

        let deadline = allowance + Duration::from_millis(self.config.grace_ms);
        let output = match timeout(deadline, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(EngineError::Process {
                    reason: "could not collect engine output".to_string(),
                    source: Some(source),
                })
            }
            // Timing out drops the wait future, and with it the child
            // handle, which kills the process (kill_on_drop).
            Err(_) => {
                return Err(EngineError::process(format!(
                    "no move within {:.3}s",
                    deadline.as_secs_f64()
                )))
            }
        };

        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(engine = %self.name, stderr = %stderr.trim(), "engine wrote to stderr");
        }
        if !output.status.success() {
            return Err(EngineError::process(format!(
                "engine exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines();
        let first = lines.next().map(str::trim).unwrap_or("");
        if first.is_empty() {
            return Err(EngineError::process("engine produced no output"));
        }
        for extra in lines {
            trace!(engine = %self.name, line = extra, "ignoring extra output line");
        }

        Ok(first.to_string())
    }
}

#[async_trait]
impl Engine for ProcessEngine {
    fn name(&self) -> &str {
        &self.name
    }

    async fn search(&mut self, board: &Board, clock: &Clock) -> Result<PlayResult, EngineError> {
        let remaining = clock.remaining_for(board.side_to_move());
        let allowance = move_allowance(remaining);

        let line = self.request_move(allowance, &board.to_string()).await?;

        // No legality check here: the host validates moves against its own
        // board state.
        let best_move: Move = line
            .parse()
            .map_err(|_| EngineError::MoveParse { line: line.clone() })?;

        Ok(PlayResult::new(best_move))
    }

    fn notify(&mut self, event: EngineEvent) {
        // One process per move request, so there is no running search to
        // steer. Recorded for debugging only.
        trace!(engine = %self.name, ?event, "ignoring host notification");
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
