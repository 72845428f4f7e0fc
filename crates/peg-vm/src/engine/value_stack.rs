//! Ordered value stack with truncation support for backtracking.
//!
//! Modeled directly on the bytecode engine's effect log: append-only on
//! success, truncatable to a watermark on failure.

use peg_core::Value;

#[derive(Debug, Default)]
pub struct ValueStack(Vec<Value>);

impl ValueStack {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    /// Current depth, used as a watermark for backtracking.
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn truncate(&mut self, watermark: usize) {
        self.0.truncate(watermark);
    }

    /// Pop every value above `watermark`, in original push order.
    pub fn drain_from(&mut self, watermark: usize) -> Vec<Value> {
        self.0.split_off(watermark)
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}
