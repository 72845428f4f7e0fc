//! PEG combinator semantics: the tree-walking interpreter over [`peg_ir::Node`].
//!
//! Every combinator that needs transactional semantics (`Sequence`,
//! `Choice`, `Optional`, `Star`, `Plus`, `Repeat`, `And`, `Not`) brackets
//! its child evaluation with a [`Checkpoint`] and restores it on failure.
//! `Literal`, `AnyByte`, `Class`, `Call`, and the capture nodes push at
//! most once on success and delegate restore to their enclosing node.

use peg_core::Value;
use peg_ir::{Grammar, Node};

use super::checkpoint::Checkpoint;
use super::cursor::Cursor;
use super::error::{ErrorReporter, RuntimeError};
use super::limits::Limits;
use super::trace::Tracer;
use super::value_stack::ValueStack;

pub struct Evaluator<'g, 'i, T: Tracer> {
    grammar: &'g Grammar,
    cursor: Cursor<'i>,
    stack: ValueStack,
    reporter: ErrorReporter,
    limits: Limits,
    fuel: u32,
    depth: u32,
    tracer: T,
}

impl<'g, 'i, T: Tracer> Evaluator<'g, 'i, T> {
    pub fn new(grammar: &'g Grammar, input: &'i [u8], limits: Limits, tracer: T) -> Self {
        Self {
            grammar,
            cursor: Cursor::new(input),
            stack: ValueStack::new(),
            reporter: ErrorReporter::new(),
            fuel: limits.exec_fuel,
            limits,
            depth: 0,
            tracer,
        }
    }

    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    pub fn into_parts(self) -> (ErrorReporter, ValueStack) {
        (self.reporter, self.stack)
    }

    pub fn eval_entry(&mut self) -> Result<bool, RuntimeError> {
        let entry = self.grammar.entry_rule();
        self.eval_node(entry)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.cursor.pos(),
            depth: self.stack.depth(),
        }
    }

    fn restore(&mut self, cp: Checkpoint) {
        self.cursor.restore(cp.pos);
        self.stack.truncate(cp.depth);
        self.tracer.trace_backtrack(cp.pos);
    }

    fn consume_fuel(&mut self) -> Result<(), RuntimeError> {
        if self.fuel == 0 {
            return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
        }
        self.fuel -= 1;
        Ok(())
    }

    pub fn eval_node(&mut self, node: &Node) -> Result<bool, RuntimeError> {
        self.consume_fuel()?;
        match node {
            Node::Literal(bytes) => Ok(self.eval_literal(bytes)),
            Node::AnyByte(n) => Ok(self.eval_any(*n)),
            Node::Class(class) => Ok(self.eval_class(class)),
            Node::Sequence(children) => self.eval_sequence(children),
            Node::Choice(alts) => self.eval_choice(alts),
            Node::Optional(child) => self.eval_repeat(child, 0, Some(1)),
            Node::Star(child) => self.eval_repeat(child, 0, None),
            Node::Plus(child) => self.eval_repeat(child, 1, None),
            Node::Repeat(child, min, max) => self.eval_repeat(child, *min, *max),
            Node::And(child) => self.eval_and(child),
            Node::Not(child) => self.eval_not(child),
            Node::Call(name) => self.eval_call(*name),
            Node::CaptureSubstring(child) => self.eval_capture_substring(child),
            Node::CapturePosition => Ok(self.eval_capture_position()),
            Node::CaptureConstant(value) => Ok(self.eval_capture_constant(value)),
            Node::CaptureTable(child) => self.eval_capture_table(child),
        }
    }

    fn eval_literal(&mut self, bytes: &[u8]) -> bool {
        let pos = self.cursor.pos();
        if self.cursor.match_literal(bytes) {
            self.tracer.trace_match_success(self.cursor.pos());
            true
        } else {
            let expected = format!("\"{}\"", String::from_utf8_lossy(bytes));
            let eof = self.cursor.len() - pos < bytes.len();
            self.fail(pos, expected, eof);
            false
        }
    }

    fn eval_any(&mut self, n: usize) -> bool {
        let pos = self.cursor.pos();
        if self.cursor.match_any(n) {
            self.tracer.trace_match_success(self.cursor.pos());
            true
        } else {
            let eof = self.cursor.len() - pos < n;
            self.fail(pos, format!("{n} more byte(s)"), eof);
            false
        }
    }

    fn eval_class(&mut self, class: &peg_ir::ByteClass) -> bool {
        let pos = self.cursor.pos();
        if self.cursor.match_class(class) {
            self.tracer.trace_match_success(self.cursor.pos());
            true
        } else {
            let eof = pos >= self.cursor.len();
            self.fail(pos, format!("character in {}", class.describe()), eof);
            false
        }
    }

    fn fail(&mut self, pos: usize, expected: String, eof: bool) {
        self.tracer.trace_match_failure(pos, &expected);
        self.reporter.report(pos, expected, eof);
    }

    fn eval_sequence(&mut self, children: &[Node]) -> Result<bool, RuntimeError> {
        let cp = self.checkpoint();
        for child in children {
            if !self.eval_node(child)? {
                self.restore(cp);
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn eval_choice(&mut self, alts: &[Node]) -> Result<bool, RuntimeError> {
        for alt in alts {
            let cp = self.checkpoint();
            if self.eval_node(alt)? {
                return Ok(true);
            }
            self.restore(cp);
        }
        Ok(false)
    }

    /// Shared implementation for `Optional`, `Star`, `Plus`, and `Repeat`.
    fn eval_repeat(
        &mut self,
        child: &Node,
        min: usize,
        max: Option<usize>,
    ) -> Result<bool, RuntimeError> {
        let outer = self.checkpoint();
        let mut count = 0usize;
        loop {
            if max.is_some_and(|max| count >= max) {
                break;
            }
            let pos_before = self.cursor.pos();
            let iter_cp = self.checkpoint();
            if !self.eval_node(child)? {
                self.restore(iter_cp);
                break;
            }
            count += 1;
            // Zero-width iteration rule: a successful iteration that consumed
            // no input still counts, but the loop stops immediately.
            if self.cursor.pos() == pos_before {
                break;
            }
        }
        if count >= min {
            Ok(true)
        } else {
            let eof = outer.pos >= self.cursor.len();
            self.fail(outer.pos, format!("at least {min} repetition(s)"), eof);
            self.restore(outer);
            Ok(false)
        }
    }

    fn eval_and(&mut self, child: &Node) -> Result<bool, RuntimeError> {
        let cp = self.checkpoint();
        let matched = self.eval_node(child)?;
        self.restore(cp);
        Ok(matched)
    }

    fn eval_not(&mut self, child: &Node) -> Result<bool, RuntimeError> {
        let cp = self.checkpoint();
        let matched = self.eval_node(child)?;
        self.restore(cp);
        if matched {
            self.fail(cp.pos, "predicate to fail".to_owned(), false);
            Ok(false)
        } else {
            Ok(true)
        }
    }

    fn eval_call(&mut self, name: peg_core::Symbol) -> Result<bool, RuntimeError> {
        if self.depth >= self.limits.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded(
                self.limits.recursion_limit,
            ));
        }
        let rule = self
            .grammar
            .rule(name)
            .expect("Call target validated when the grammar was built");
        self.tracer.trace_enter_rule(self.grammar.rule_name(name));
        self.depth += 1;
        let result = self.eval_node(rule);
        self.depth -= 1;
        result
    }

    fn eval_capture_substring(&mut self, child: &Node) -> Result<bool, RuntimeError> {
        let start = self.cursor.pos();
        if self.eval_node(child)? {
            let bytes = self.cursor.slice(start, self.cursor.pos()).to_vec();
            self.stack.push(Value::Bytes(bytes));
            self.tracer.trace_capture(self.stack.depth());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eval_capture_position(&mut self) -> bool {
        // One-based in the pushed value; `pos` itself stays zero-based internally.
        self.stack.push(Value::Int(self.cursor.pos() as i64 + 1));
        self.tracer.trace_capture(self.stack.depth());
        true
    }

    fn eval_capture_constant(&mut self, value: &Value) -> bool {
        self.stack.push(value.clone());
        self.tracer.trace_capture(self.stack.depth());
        true
    }

    fn eval_capture_table(&mut self, child: &Node) -> Result<bool, RuntimeError> {
        let depth0 = self.stack.depth();
        if self.eval_node(child)? {
            let items = self.stack.drain_from(depth0);
            self.stack.push(Value::List(items));
            self.tracer.trace_capture(self.stack.depth());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
