//! Runtime limits guarding against runaway grammars.
//!
//! Left-recursive rules are out of scope and may loop (§9); these limits
//! turn an unbounded loop into a reported error instead of a hang.

#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Maximum total evaluation steps (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum `Call` recursion depth (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 1024,
        }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }
}
