#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core value types shared by the grammar IR and the runtime engine.
//!
//! This crate has no knowledge of PEG semantics. It just hosts:
//! - [`Value`], the closed tagged union produced by captures
//! - [`Interner`]/[`Symbol`], used to key rule names in the grammar's rule table
//! - [`Colors`], ANSI formatting shared between the grammar dumper and the CLI

mod colors;
mod interner;
mod value;

#[cfg(test)]
mod interner_tests;
#[cfg(test)]
mod lib_tests;

pub use colors::Colors;
pub use interner::{Interner, Symbol};
pub use value::Value;
