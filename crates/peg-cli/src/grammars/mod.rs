//! Demo grammars built directly with [`peg_ir::GrammarBuilder`].
//!
//! These stand in for a grammar front-end, which is out of scope for the
//! engine crates — a real one would parse grammar source text into the
//! same [`peg_ir::Node`] trees constructed here by hand.

pub mod calc;
pub mod json;

fn ws_class() -> peg_ir::ByteClass {
    peg_ir::ByteClass::new(vec![], vec![b' ', b'\t', b'\n', b'\r'])
}

fn ws() -> peg_ir::Node {
    peg_ir::Node::star(peg_ir::Node::Class(ws_class()))
}

fn digit_class() -> peg_ir::ByteClass {
    peg_ir::ByteClass::range(b'0', b'9')
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`, shared by both demo grammars.
fn number_body() -> peg_ir::Node {
    use peg_ir::Node;

    let int_part = Node::choice([
        Node::literal("0"),
        Node::sequence([
            Node::Class(peg_ir::ByteClass::range(b'1', b'9')),
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
