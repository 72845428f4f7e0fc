//! A JSON grammar covering the full value grammar (objects, arrays,
//! strings with escapes, numbers, booleans, null), grounded in
//! `json_parser.c` from the original scenario pack. Each value is tagged
//! with a leading constant (`"object"`, `"array"`, `"string"`, ...) so a
//! consumer can dispatch on `values[0]` without re-deriving the shape from
//! the grammar.

use peg_core::Value;
use peg_ir::{ByteClass, Grammar, GrammarBuilder, Node};

use super::{number_body, ws};

fn hex_digit() -> ByteClass {
    ByteClass::new(vec![(b'0', b'9'), (b'a', b'f'), (b'A', b'F')], vec![])
}

fn tag(name: &str) -> Node {
    Node::CaptureConstant(Value::bytes(name.as_bytes().to_vec()))
}

pub fn grammar() -> Grammar {
    let mut builder = GrammarBuilder::new();

    let unescaped = ByteClass::new(vec![(0x20, 0x21), (0x23, 0x5b), (0x5d, 0xff)], vec![]);
    let simple_escape = ByteClass::new(
        vec![],
        vec![b'"', b'\\', b'/', b'b', b'f', b'n', b'r', b't'],
    );
    let escape = Node::choice([
        Node::sequence([Node::literal("\\"), Node::Class(simple_escape)]),
        Node::sequence([
            Node::literal("\\u"),
            Node::Repeat(Box::new(Node::Class(hex_digit())), 4, Some(4)),
        ]),
    ]);
    let string_char = Node::choice([Node::Class(unescaped), escape]);
    let string = Node::table(Node::sequence([
        tag("string"),
        Node::literal("\""),
        Node::substring(Node::star(string_char)),
        Node::literal("\""),
    ]));
    builder.add_rule("string", string).unwrap();

    let number = Node::table(Node::sequence([tag("number"), Node::substring(number_body())]));
    builder.add_rule("number", number).unwrap();

    let boolean = Node::choice([
        Node::table(Node::sequence([
            tag("boolean"),
            Node::literal("true"),
            Node::CaptureConstant(Value::Bool(true)),
        ])),
        Node::table(Node::sequence([
            tag("boolean"),
            Node::literal("false"),
            Node::CaptureConstant(Value::Bool(false)),
        ])),
    ]);
    builder.add_rule("boolean", boolean).unwrap();

    let null = Node::table(Node::sequence([tag("null"), Node::literal("null")]));
    builder.add_rule("null", null).unwrap();

    let value_call = Node::Call(builder.intern("value"));
    let array = Node::table(Node::sequence([
        tag("array"),
        Node::literal("["),
        ws(),
        Node::optional(Node::sequence([
            value_call.clone(),
            Node::star(Node::sequence([ws(), Node::literal(","), ws(), value_call.clone()])),
        ])),
        ws(),
        Node::literal("]"),
    ]));
    builder.add_rule("array", array).unwrap();

    let member = Node::table(Node::sequence([
        tag("member"),
        Node::Call(builder.intern("string")),
        ws(),
        Node::literal(":"),
        ws(),
        value_call.clone(),
    ]));
    builder.add_rule("member", member).unwrap();

    let member_call = Node::Call(builder.intern("member"));
    let object = Node::table(Node::sequence([
        tag("object"),
        Node::literal("{"),
        ws(),
        Node::optional(Node::sequence([
            member_call.clone(),
            Node::star(Node::sequence([ws(), Node::literal(","), ws(), member_call.clone()])),
        ])),
        ws(),
        Node::literal("}"),
    ]));
    builder.add_rule("object", object).unwrap();

    let value = Node::choice([
        Node::Call(builder.intern("object")),
        Node::Call(builder.intern("array")),
        Node::Call(builder.intern("string")),
        Node::Call(builder.intern("number")),
        Node::Call(builder.intern("boolean")),
        Node::Call(builder.intern("null")),
    ]);
    builder.add_rule("value", value).unwrap();

    let document = Node::sequence([ws(), Node::Call(builder.intern("value")), ws()]);
    builder.add_rule("document", document).unwrap();

    builder.build("document").expect("json grammar is well-formed")
}
