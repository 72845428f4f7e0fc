//! Execution tracing.
//!
//! `NoopTracer` calls are trivial enough to be optimized away entirely;
//! `PrintTracer` prints a line per traced event, gated by a verbosity
//! level, to stderr.

use super::cursor::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Steps,
    Verbose,
}

pub trait Tracer {
    fn trace_enter_rule(&mut self, _name: &str) {}
    fn trace_match_success(&mut self, _pos: Pos) {}
    fn trace_match_failure(&mut self, _pos: Pos, _message: &str) {}
    fn trace_backtrack(&mut self, _to_pos: Pos) {}
    fn trace_capture(&mut self, _depth: usize) {}
}

pub struct NoopTracer;

impl Tracer for NoopTracer {}

pub struct PrintTracer {
    pub verbosity: Verbosity,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Tracer for PrintTracer {
    fn trace_enter_rule(&mut self, name: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("enter {name}");
        }
    }

    fn trace_match_success(&mut self, pos: Pos) {
        if self.verbosity >= Verbosity::Steps {
            eprintln!("match ok @{pos}");
        }
    }

    fn trace_match_failure(&mut self, pos: Pos, message: &str) {
        if self.verbosity >= Verbosity::Steps {
            eprintln!("match fail @{pos}: {message}");
        }
    }

    fn trace_backtrack(&mut self, to_pos: Pos) {
        if self.verbosity >= Verbosity::Steps {
            eprintln!("backtrack -> @{to_pos}");
        }
    }

    fn trace_capture(&mut self, depth: usize) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("capture, depth now {depth}");
        }
    }
}
