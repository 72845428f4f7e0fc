//! Grammar intermediate representation for the PEG engine.
//!
//! A grammar is a rule table ([`Grammar`]) of named combinator trees
//! ([`Node`]). This crate defines that data model and a dumper for
//! inspecting it; it does not parse grammar source text or generate code —
//! front-ends build a [`Grammar`] directly with [`GrammarBuilder`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod dump;
mod error;
mod grammar;
mod node;

#[cfg(test)]
mod node_tests;

pub use dump::dump_grammar;
pub use error::GrammarError;
pub use grammar::{Grammar, GrammarBuilder};
pub use node::{ByteClass, Node};
