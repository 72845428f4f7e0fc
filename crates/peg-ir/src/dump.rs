//! Colored, indented pretty-printer for a [`Grammar`]'s combinator tree.
//!
//! Output format is line-oriented and meant for terminal/log consumption,
//! not for round-tripping — there is no corresponding parser.

use peg_core::Colors;

use crate::grammar::Grammar;
use crate::node::Node;

pub fn dump_grammar(grammar: &Grammar, colors: Colors) -> String {
    let mut out = String::new();
    for (sym, node) in grammar.rules() {
        let name = grammar.rule_name(sym);
        let marker = if sym == grammar.entry() { "*" } else { " " };
        out.push_str(&format!(
            "{marker}{}{}{}:\n",
            colors.blue, name, colors.reset
        ));
        dump_node(node, grammar, 1, &mut out, colors);
    }
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn dump_node(node: &Node, grammar: &Grammar, depth: usize, out: &mut String, colors: Colors) {
    indent(out, depth);
    match node {
        Node::Literal(bytes) => {
            out.push_str(&format!(
                "{}literal{} {:?}\n",
                colors.dim, colors.reset, String::from_utf8_lossy(bytes)
            ));
        }
        Node::AnyByte(n) => {
            out.push_str(&format!("{}any{} x{n}\n", colors.dim, colors.reset));
        }
        Node::Class(class) => {
            out.push_str(&format!(
                "{}class{} {}\n",
                colors.dim,
                colors.reset,
                class.describe()
            ));
        }
        Node::Sequence(children) => {
            out.push_str(&format!("{}sequence{}\n", colors.dim, colors.reset));
            for child in children {
                dump_node(child, grammar, depth + 1, out, colors);
            }
        }
        Node::Choice(alts) => {
            out.push_str(&format!("{}choice{}\n", colors.dim, colors.reset));
            for alt in alts {
                dump_node(alt, grammar, depth + 1, out, colors);
            }
        }
        Node::Optional(child) => {
            out.push_str(&format!("{}optional{}\n", colors.dim, colors.reset));
            dump_node(child, grammar, depth + 1, out, colors);
        }
        Node::Star(child) => {
            out.push_str(&format!("{}star{}\n", colors.dim, colors.reset));
            dump_node(child, grammar, depth + 1, out, colors);
        }
        Node::Plus(child) => {
            out.push_str(&format!("{}plus{}\n", colors.dim, colors.reset));
            dump_node(child, grammar, depth + 1, out, colors);
        }
        Node::Repeat(child, min, max) => {
            let max = max.map(|m| m.to_string()).unwrap_or_else(|| "inf".into());
            out.push_str(&format!(
                "{}repeat{} {{{min},{max}}}\n",
                colors.dim, colors.reset
            ));
            dump_node(child, grammar, depth + 1, out, colors);
        }
        Node::And(child) => {
            out.push_str(&format!("{}and&{}\n", colors.dim, colors.reset));
            dump_node(child, grammar, depth + 1, out, colors);
        }
        Node::Not(child) => {
            out.push_str(&format!("{}not!{}\n", colors.dim, colors.reset));
            dump_node(child, grammar, depth + 1, out, colors);
        }
        Node::Call(name) => {
            out.push_str(&format!(
                "{}call{} {}\n",
                colors.blue,
                colors.reset,
                grammar.rule_name(*name)
            ));
        }
        Node::CaptureSubstring(child) => {
            out.push_str(&format!("{}capture.substring{}\n", colors.dim, colors.reset));
            dump_node(child, grammar, depth + 1, out, colors);
        }
        Node::CapturePosition => {
            out.push_str(&format!("{}capture.position{}\n", colors.dim, colors.reset));
        }
        Node::CaptureConstant(value) => {
            out.push_str(&format!(
                "{}capture.constant{} {}\n",
                colors.dim,
                colors.reset,
                value.format(false, colors)
            ));
        }
        Node::CaptureTable(child) => {
            out.push_str(&format!("{}capture.table{}\n", colors.dim, colors.reset));
            dump_node(child, grammar, depth + 1, out, colors);
        }
    }
}
