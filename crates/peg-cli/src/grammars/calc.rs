//! A small four-operator arithmetic grammar: `expr <- term (('+'/'-') term)*`.
//!
//! Precedence is expressed by rule nesting (`expr` calls `term` calls
//! `primary`) rather than left recursion, which the engine does not
//! support. Each level captures a flat `[operand, op, operand, op, ...]`
//! list rather than a nested tree — evaluating that list into a number is
//! [`crate::commands::calc::evaluate`]'s job, not the grammar's.

use peg_core::Value;
use peg_ir::{ByteClass, Grammar, GrammarBuilder, Node};

use super::{number_body, ws};

pub fn grammar() -> Grammar {
    let mut builder = GrammarBuilder::new();

    let number = Node::table(Node::sequence([
        Node::CaptureConstant(Value::bytes(b"num".to_vec())),
        Node::substring(number_body()),
    ]));
    builder.add_rule("number", number).unwrap();

    let primary = Node::choice([
        Node::Call(builder.intern("number")),
        Node::sequence([
            Node::literal("("),
            ws(),
            Node::Call(builder.intern("expr")),
            ws(),
            Node::literal(")"),
        ]),
    ]);
    builder.add_rule("primary", primary).unwrap();

    let mul_div = ByteClass::new(vec![], vec![b'*', b'/']);
    let term = Node::table(Node::sequence([
        Node::Call(builder.intern("primary")),
        Node::star(Node::sequence([
            ws(),
            Node::substring(Node::Class(mul_div)),
            ws(),
            Node::Call(builder.intern("primary")),
        ])),
    ]));
    builder.add_rule("term", term).unwrap();

    let add_sub = ByteClass::new(vec![], vec![b'+', b'-']);
    let expr = Node::table(Node::sequence([
        Node::Call(builder.intern("term")),
        Node::star(Node::sequence([
            ws(),
            Node::substring(Node::Class(add_sub)),
            ws(),
            Node::Call(builder.intern("term")),
        ])),
    ]));
    builder.add_rule("expr", expr).unwrap();

    let program = Node::sequence([ws(), Node::Call(builder.intern("expr")), ws()]);
    builder.add_rule("program", program).unwrap();

    builder.build("program").expect("calc grammar is well-formed")
}
