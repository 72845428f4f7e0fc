//! Runtime engine that evaluates a grammar IR against input bytes.
//!
//! Executes a tree-walking interpreter over `peg_ir::Node` with
//! transactional backtracking, producing a value stack of captures.

mod checkpoint;
mod cursor;
mod driver;
mod error;
mod evaluator;
mod limits;
mod trace;
mod value_stack;

#[cfg(test)]
mod driver_tests;

pub use driver::{Outcome, parse, parse_with};
pub use error::RuntimeError;
pub use evaluator::Evaluator;
pub use limits::Limits;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
