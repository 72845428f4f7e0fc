//! `peg dump`: prints a demo grammar's combinator tree via `peg_ir::dump_grammar`.

use peg_core::Colors;

use crate::cli::{ColorChoice, Grammar};
use crate::grammars::{calc, json};

pub fn run(grammar: Grammar, color: ColorChoice) {
    let built = match grammar {
        Grammar::Calc => calc::grammar(),
        Grammar::Json => json::grammar(),
    };
    let colors = Colors::new(color.should_colorize());
    print!("{}", peg_ir::dump_grammar(&built, colors));
}
