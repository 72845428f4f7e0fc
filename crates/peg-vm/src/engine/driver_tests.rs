use peg_core::Value;
use peg_ir::{ByteClass, Grammar, GrammarBuilder, Node};

use super::driver::{Outcome, parse};
use super::evaluator::Evaluator;
use super::limits::Limits;
use super::trace::NoopTracer;

fn digit_class() -> ByteClass {
    ByteClass::range(b'0', b'9')
}

fn ws_class() -> ByteClass {
    ByteClass::new(vec![], vec![b' ', b'\t', b'\n', b'\r'])
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn json_number_body() -> Node {
    let int_part = Node::choice([
        Node::literal("0"),
        Node::sequence([
            Node::Class(ByteClass::range(b'1', b'9')),
            Node::star(Node::Class(digit_class())),
        ]),
    ]);
    let frac = Node::optional(Node::sequence([
        Node::literal("."),
        Node::plus(Node::Class(digit_class())),
    ]));
    let exp = Node::optional(Node::sequence([
        Node::choice([Node::literal("e"), Node::literal("E")]),
        Node::optional(Node::choice([Node::literal("+"), Node::literal("-")])),
        Node::plus(Node::Class(digit_class())),
    ]));
    Node::sequence([Node::optional(Node::literal("-")), int_part, frac, exp])
}

fn single_rule_grammar(body: Node) -> Grammar {
    let mut builder = GrammarBuilder::new();
    builder.add_rule("main", body).unwrap();
    builder.build("main").unwrap()
}

#[test]
fn scenario_1_json_number() {
    let body = Node::table(Node::sequence([
        Node::CaptureConstant(Value::bytes(b"number".to_vec())),
        Node::substring(json_number_body()),
    ]));
    let grammar = single_rule_grammar(body);
    let outcome = parse(&grammar, b"-3.14e+2").unwrap();
    assert_eq!(
        outcome,
        Outcome::OkValues {
            values: vec![Value::List(vec![
                Value::bytes(b"number".to_vec()),
                Value::bytes(b"-3.14e+2".to_vec()),
            ])]
        }
    );
}

/// A tiny JSON subset: objects of string-keyed members whose values are
/// numbers or booleans — just enough to exercise nested table captures.
fn json_object_grammar() -> Grammar {
    let not_quote = ByteClass::new(vec![(0x00, 0x21), (0x23, 0x7e)], vec![]);
    let ws = Node::star(Node::Class(ws_class()));

    let string_value = Node::table(Node::sequence([
        Node::CaptureConstant(Value::bytes(b"string".to_vec())),
        Node::literal("\""),
        Node::substring(Node::star(Node::Class(not_quote.clone()))),
        Node::literal("\""),
    ]));
    let number_value = Node::table(Node::sequence([
        Node::CaptureConstant(Value::bytes(b"number".to_vec())),
        Node::substring(json_number_body()),
    ]));
    let boolean_value = Node::choice([
        Node::table(Node::sequence([
            Node::CaptureConstant(Value::bytes(b"boolean".to_vec())),
            Node::literal("true"),
            Node::CaptureConstant(Value::Bool(true)),
        ])),
        Node::table(Node::sequence([
            Node::CaptureConstant(Value::bytes(b"boolean".to_vec())),
            Node::literal("false"),
            Node::CaptureConstant(Value::Bool(false)),
        ])),
    ]);
    let value = Node::choice([number_value, boolean_value, string_value.clone()]);

    let member = Node::table(Node::sequence([
        Node::CaptureConstant(Value::bytes(b"member".to_vec())),
        string_value,
        ws.clone(),
        Node::literal(":"),
        ws.clone(),
        value,
    ]));
    let members_tail = Node::star(Node::sequence([
        ws.clone(),
        Node::literal(","),
        ws.clone(),
        member.clone(),
    ]));
    let object = Node::table(Node::sequence([
        Node::CaptureConstant(Value::bytes(b"object".to_vec())),
        Node::literal("{"),
        ws.clone(),
        Node::optional(Node::sequence([member, members_tail])),
        ws,
        Node::literal("}"),
    ]));

    single_rule_grammar(object)
}

#[test]
fn scenario_2_json_object() {
    let grammar = json_object_grammar();
    let outcome = parse(&grammar, br#"{"a":1, "b":true}"#).unwrap();
    let tag = |s: &str| Value::bytes(s.as_bytes().to_vec());
    let expected = Value::List(vec![
        tag("object"),
        Value::List(vec![
            tag("member"),
            Value::List(vec![tag("string"), tag("a")]),
            Value::List(vec![tag("number"), tag("1")]),
        ]),
        Value::List(vec![
            tag("member"),
            Value::List(vec![tag("string"), tag("b")]),
            Value::List(vec![tag("boolean"), Value::Bool(true)]),
        ]),
    ]);
    assert_eq!(
        outcome,
        Outcome::OkValues {
            values: vec![expected]
        }
    );
}

#[test]
fn scenario_3_json_null() {
    let body = Node::table(Node::sequence([
        Node::literal("null"),
        Node::CaptureConstant(Value::bytes(b"null".to_vec())),
    ]));
    let grammar = single_rule_grammar(body);
    let outcome = parse(&grammar, b"null").unwrap();
    assert_eq!(
        outcome,
        Outcome::OkValues {
            values: vec![Value::List(vec![Value::bytes(b"null".to_vec())])]
        }
    );
}

#[test]
fn scenario_4_positive_lookahead() {
    let body = Node::sequence([
        Node::literal("abc"),
        Node::and(Node::literal("def")),
        Node::literal("def"),
        Node::not(Node::AnyByte(1)),
    ]);
    let grammar = single_rule_grammar(body);
    let outcome = parse(&grammar, b"abcdef").unwrap();
    assert_eq!(
        outcome,
        Outcome::OkNoCaptures { next_position: 7 }
    );
}

#[test]
fn scenario_5_negative_lookahead_does_not_consume() {
    let body = Node::sequence([
        Node::literal("xyz"),
        Node::and(Node::not(Node::literal("def"))),
    ]);
    let grammar = single_rule_grammar(body);
    let mut evaluator = Evaluator::new(&grammar, b"xyzabc", Limits::default(), NoopTracer);
    let matched = evaluator.eval_entry().unwrap();
    assert!(matched);
    assert_eq!(evaluator.pos(), 3);
}

#[test]
fn scenario_6_position_capture_list() {
    let ident = ByteClass::new(vec![(b'a', b'z'), (b'A', b'Z')], vec![]);
    let ws = Node::star(Node::Class(ws_class()));
    let item = Node::table(Node::sequence([
        Node::CapturePosition,
        Node::substring(Node::plus(Node::Class(ident))),
    ]));
    let sep = Node::sequence([
        ws.clone(),
        Node::optional(Node::literal(",")),
        ws.clone(),
    ]);
    let body = Node::sequence([
        ws,
        item.clone(),
        Node::star(Node::sequence([sep, item])),
    ]);
    let grammar = single_rule_grammar(body);
    let outcome = parse(&grammar, b"  foo, bar ,baz").unwrap();
    let Outcome::OkValues { values } = outcome else {
        panic!("expected captures, got {outcome:?}");
    };
    let expected = vec![
        Value::List(vec![Value::Int(3), Value::bytes(b"foo".to_vec())]),
        Value::List(vec![Value::Int(8), Value::bytes(b"bar".to_vec())]),
        Value::List(vec![Value::Int(13), Value::bytes(b"baz".to_vec())]),
    ];
    assert_eq!(values, expected);
}

#[test]
fn scenario_7_multiple_constants_in_order() {
    let body = Node::sequence([
        Node::literal("test"),
        Node::CaptureConstant(Value::Int(42)),
        Node::CaptureConstant(Value::bytes(b"test_field".to_vec())),
        Node::CaptureConstant(Value::Null),
        Node::CaptureConstant(Value::Bool(true)),
    ]);
    let grammar = single_rule_grammar(body);
    let outcome = parse(&grammar, b"test").unwrap();
    assert_eq!(
        outcome,
        Outcome::OkValues {
            values: vec![
                Value::Int(42),
                Value::bytes(b"test_field".to_vec()),
                Value::Null,
                Value::Bool(true),
            ]
        }
    );
}

#[test]
fn scenario_8_range_of_tokens() {
    let alnum = ByteClass::new(vec![(b'0', b'9'), (b'a', b'z'), (b'A', b'Z')], vec![]);
    let token = Node::sequence([
        Node::substring(Node::plus(Node::Class(alnum))),
        Node::star(Node::Class(ws_class())),
    ]);
    let body = Node::table(Node::star(token));
    let grammar = single_rule_grammar(body);
    let outcome = parse(&grammar, b"foo bar 123").unwrap();
    assert_eq!(
        outcome,
        Outcome::OkValues {
            values: vec![Value::List(vec![
                Value::bytes(b"foo".to_vec()),
                Value::bytes(b"bar".to_vec()),
                Value::bytes(b"123".to_vec()),
            ])]
        }
    );
}

#[test]
fn failure_reports_furthest_position() {
    let grammar = single_rule_grammar(Node::sequence([
        Node::literal("abc"),
        Node::literal("XYZ"),
    ]));
    let outcome = parse(&grammar, b"abcdef").unwrap();
    let Outcome::Fail { message, position } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(position, 4);
    assert_eq!(message, "Expected \"XYZ\" at position 4");
}

#[test]
fn failure_at_end_of_input_notes_eof() {
    let grammar = single_rule_grammar(Node::literal("abcd"));
    let outcome = parse(&grammar, b"abc").unwrap();
    let Outcome::Fail { message, position } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(position, 4);
    assert!(message.ends_with("but reached end of input"));
}
