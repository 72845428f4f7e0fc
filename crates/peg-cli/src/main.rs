mod cli;
mod commands;
mod grammars;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Calc {
            expression,
            captures,
            trace,
        } => commands::calc::run(&expression, captures, trace),
        Command::Json {
            document,
            file,
            pretty,
            color,
        } => commands::json::run(document.as_deref(), file.as_deref(), pretty, color),
        Command::Dump { grammar, color } => {
            commands::dump::run(grammar, color);
            ExitCode::SUCCESS
        }
    }
}
