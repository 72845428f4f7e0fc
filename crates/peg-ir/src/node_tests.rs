use peg_core::Value;

use crate::node::{ByteClass, Node};

#[test]
fn byte_class_contains_ranges_and_set() {
    let class = ByteClass::new(vec![(b'0', b'9')], vec![b'_']);
    assert!(class.contains(b'5'));
    assert!(class.contains(b'_'));
    assert!(!class.contains(b'a'));
}

#[test]
fn byte_class_describe_formats_graphic_bytes() {
    let class = ByteClass::range(b'a', b'z');
    assert_eq!(class.describe(), "[a-z]");
}

#[test]
fn byte_class_describe_escapes_nongraphic_bytes() {
    let class = ByteClass::single(0x01);
    assert_eq!(class.describe(), "[0x01]");
}

#[test]
fn for_each_call_finds_nested_calls() {
    let sym_a = peg_core::Interner::new().intern("a");
    let node = Node::sequence([
        Node::literal("x"),
        Node::Call(sym_a),
        Node::optional(Node::Call(sym_a)),
    ]);
    let mut calls = Vec::new();
    node.for_each_call(|s| calls.push(s));
    assert_eq!(calls.len(), 2);
}

#[test]
fn for_each_call_skips_leaves_without_calls() {
    let node = Node::choice([
        Node::literal("a"),
        Node::Class(ByteClass::single(b'x')),
        Node::CapturePosition,
        Node::CaptureConstant(Value::Int(1)),
    ]);
    let mut count = 0;
    node.for_each_call(|_| count += 1);
    assert_eq!(count, 0);
}

#[test]
fn builder_helpers_wrap_expected_variants() {
    assert!(matches!(Node::star(Node::literal("a")), Node::Star(_)));
    assert!(matches!(Node::plus(Node::literal("a")), Node::Plus(_)));
    assert!(matches!(Node::and(Node::literal("a")), Node::And(_)));
    assert!(matches!(Node::not(Node::literal("a")), Node::Not(_)));
    assert!(matches!(
        Node::substring(Node::literal("a")),
        Node::CaptureSubstring(_)
    ));
    assert!(matches!(Node::table(Node::literal("a")), Node::CaptureTable(_)));
}
