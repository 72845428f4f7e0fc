//! `peg calc`: mirrors the original `calc "expression"` demo's exit-code
//! contract (0 and a confirmation on success, 1 and a diagnostic on
//! failure), with an opt-in flag to also show what the grammar captured.

use std::process::ExitCode;

use peg_core::{Colors, Value};
use peg_vm::{Outcome, PrintTracer};

use crate::cli::Trace;
use crate::grammars::calc;

/// Reduces a captured `number`/`term`/`expr` list into its numeric value.
///
/// `number` captures as `["num", digits]`; every other level captures as a
/// flat `[operand, op, operand, op, operand, ...]` list, left-folded here in
/// the same order the operators appeared in the source text.
fn evaluate(value: &Value) -> f64 {
    let items = value.as_list().expect("grammar only ever captures lists");
    if items.first().and_then(Value::as_bytes) == Some(b"num") {
        let digits = items[1].as_bytes().expect("number body is a substring capture");
        return std::str::from_utf8(digits)
            .expect("number body is ASCII")
            .parse()
            .expect("number body matches the grammar's numeric syntax");
    }

    let mut acc = evaluate(&items[0]);
    let mut rest = &items[1..];
    while let [op, operand, tail @ ..] = rest {
        let op = op.as_bytes().expect("operator is a substring capture");
        let rhs = evaluate(operand);
        acc = match op {
            b"+" => acc + rhs,
            b"-" => acc - rhs,
            b"*" => acc * rhs,
            b"/" => acc / rhs,
            other => unreachable!("grammar only captures +-*/ as operators, got {other:?}"),
        };
        rest = tail;
    }
    acc
}

pub fn run(expression: &str, captures: bool, trace: Trace) -> ExitCode {
    println!("parsing expression: {expression}");
    let grammar = calc::grammar();
    let tracer = PrintTracer::new(trace.into());
    let outcome = match peg_vm::parse_with(&grammar, expression.as_bytes(), Default::default(), tracer) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match outcome {
        Outcome::Fail { message, position } => {
            eprintln!("expression is invalid: {message} (position {position})");
            ExitCode::FAILURE
        }
        Outcome::OkNoCaptures { .. } => {
            println!("expression is valid");
            ExitCode::SUCCESS
        }
        Outcome::OkValues { values } => {
            println!("expression is valid");
            if captures {
                for value in &values {
                    println!("{}", value.format(false, Colors::new(false)));
                    println!("= {}", evaluate(value));
                }
            }
            ExitCode::SUCCESS
        }
    }
}
