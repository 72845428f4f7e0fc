//! `peg json`: parses a document and prints the resulting capture tree.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use peg_core::Colors;
use peg_vm::Outcome;

use crate::cli::ColorChoice;
use crate::grammars::json;

pub fn run(document: Option<&str>, file: Option<&Path>, pretty: bool, color: ColorChoice) -> ExitCode {
    let text = match (document, file) {
        (Some(text), None) => text.to_owned(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("error: failed to read {}: {err}", path.display());
                return ExitCode::from(2);
            }
        },
        (None, None) => {
            eprintln!("error: provide a document argument or --file");
            return ExitCode::from(2);
        }
        (Some(_), Some(_)) => unreachable!("clap rejects document with --file"),
    };

    let grammar = json::grammar();
    let outcome = match peg_vm::parse(&grammar, text.as_bytes()) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match outcome {
        Outcome::Fail { message, position } => {
            eprintln!("invalid document: {message} (position {position})");
            ExitCode::FAILURE
        }
        Outcome::OkNoCaptures { .. } => {
            // The grammar always wraps its matched value in a table, so an
            // empty capture stack only happens for a document with no value.
            println!("null");
            ExitCode::SUCCESS
        }
        Outcome::OkValues { values } => {
            let colors = Colors::new(color.should_colorize());
            for value in &values {
                if colors.is_enabled() {
                    println!("{}", value.format(pretty, colors));
                } else {
                    let rendered = if pretty {
                        serde_json::to_string_pretty(value)
                    } else {
                        serde_json::to_string(value)
                    };
                    println!("{}", rendered.expect("Value serialization is infallible"));
                }
            }
            ExitCode::SUCCESS
        }
    }
}
