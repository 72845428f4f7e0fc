//! Parse entry point: drives the evaluator from a grammar's entry rule and
//! assembles the final [`Outcome`].

use peg_core::Value;
use peg_ir::Grammar;

use super::error::RuntimeError;
use super::evaluator::Evaluator;
use super::limits::Limits;
use super::trace::{NoopTracer, Tracer};

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Fail { message: String, position: usize },
    OkNoCaptures { next_position: usize },
    OkValues { values: Vec<Value> },
}

pub fn parse(grammar: &Grammar, input: &[u8]) -> Result<Outcome, RuntimeError> {
    parse_with(grammar, input, Limits::default(), NoopTracer)
}

pub fn parse_with<T: Tracer>(
    grammar: &Grammar,
    input: &[u8],
    limits: Limits,
    tracer: T,
) -> Result<Outcome, RuntimeError> {
    let mut eval = Evaluator::new(grammar, input, limits, tracer);
    let matched = eval.eval_entry()?;
    let end_pos = eval.pos();
    let (reporter, stack) = eval.into_parts();

    if matched && end_pos == input.len() {
        let values = stack.into_vec();
        return Ok(if values.is_empty() {
            Outcome::OkNoCaptures {
                next_position: end_pos + 1,
            }
        } else {
            Outcome::OkValues { values }
        });
    }

    let (position, message) = match reporter.into_failure() {
        Some((pos, expected, eof)) => {
            let position = pos + 1;
            let message = if eof {
                format!("Expected {expected} at position {position} but reached end of input")
            } else {
                format!("Expected {expected} at position {position}")
            };
            (position, message)
        }
        None => {
            // The entry rule matched but left unconsumed input, and no
            // leaf ever failed (e.g. the grammar omits a trailing `!.`
            // guard). The driver's own end-of-input check is the failure.
            let position = end_pos + 1;
            (
                position,
                format!("Expected end of input at position {position}"),
            )
        }
    };

    Ok(Outcome::Fail { message, position })
}
