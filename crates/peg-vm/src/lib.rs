//! Runtime engine for PEG grammars.
//!
//! Evaluates a [`peg_ir::Grammar`] against input bytes with PEG ordered-
//! choice/backtracking semantics and the capture sub-language, producing
//! a [`Outcome`] of captured values or a furthest-failure diagnostic.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{NoopTracer, Outcome, PrintTracer, RuntimeError, Tracer, Verbosity, parse, parse_with};
