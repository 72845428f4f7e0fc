//! Runtime error taxonomy and the furthest-failure reporter.
//!
//! Leaf match failures and synthetic failures (unmet `Repeat` minimum, a
//! `Not` whose child unexpectedly matched) are not propagated as Rust
//! errors — they are ordinary backtracking events recorded here and
//! consumed by `Choice`/repetition combinators. `RuntimeError` is reserved
//! for conditions that bypass backtracking entirely: exhausted fuel or
//! recursion depth.

use thiserror::Error;

use super::cursor::Pos;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("execution fuel exhausted after {0} steps")]
    ExecFuelExhausted(u32),
    #[error("recursion limit of {0} exceeded")]
    RecursionLimitExceeded(u32),
}

/// Tracks the furthest-position leaf failure seen during a parse.
///
/// Ties keep the earliest-reported message: the first failure that reached
/// this position wins, later failures at the same position are ignored.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    furthest: Option<(Pos, String, bool)>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `eof` marks a failure that ran out of input partway through a match,
    /// as opposed to a mismatch against bytes that were actually present.
    pub fn report(&mut self, pos: Pos, message: impl Into<String>, eof: bool) {
        match &self.furthest {
            Some((best_pos, _, _)) if *best_pos >= pos => {}
            _ => self.furthest = Some((pos, message.into(), eof)),
        }
    }

    pub fn into_failure(self) -> Option<(Pos, String, bool)> {
        self.furthest
    }
}
