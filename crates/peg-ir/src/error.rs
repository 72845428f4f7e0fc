//! Grammar construction errors.
//!
//! These are front-end/IR-construction concerns, distinct from the parse
//! failures the engine reports at runtime (see `peg-vm`'s `RuntimeError`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("entry rule \"{0}\" is not defined")]
    UnknownEntry(String),
    #[error("rule \"{caller}\" calls undefined rule \"{callee}\"")]
    UnknownRule { caller: String, callee: String },
    #[error("rule \"{0}\" is defined more than once")]
    DuplicateRule(String),
}
