//! Combinator tree: the node kinds a grammar front-end may emit.
//!
//! A [`Node`] owns its children directly except for [`Node::Call`], which
//! only carries the callee's interned name — rules are looked up in the
//! [`crate::Grammar`]'s rule table at evaluation time so that mutually
//! recursive (and forward-referencing) rules don't need owning pointers
//! that would force a topological order.

use peg_core::{Symbol, Value};

/// An inclusive byte-range/singleton-set character class.
///
/// Matches are always single bytes; there is no notion of Unicode code
/// points here, only raw byte intervals and explicit singleton bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteClass {
    pub ranges: Vec<(u8, u8)>,
    pub set: Vec<u8>,
}

impl ByteClass {
    pub fn new(ranges: Vec<(u8, u8)>, set: Vec<u8>) -> Self {
        Self { ranges, set }
    }

    pub fn range(lo: u8, hi: u8) -> Self {
        Self {
            ranges: vec![(lo, hi)],
            set: Vec::new(),
        }
    }

    pub fn single(byte: u8) -> Self {
        Self {
            ranges: Vec::new(),
            set: vec![byte],
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.ranges.iter().any(|&(lo, hi)| byte >= lo && byte <= hi) || self.set.contains(&byte)
    }

    /// Human-readable description used both in dumps and in error messages,
    /// e.g. `[a-b, c-d, 'x']`.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = self
            .ranges
            .iter()
            .map(|&(lo, hi)| {
                if lo == hi {
                    format!("{}", ByteDisplay(lo))
                } else {
                    format!("{}-{}", ByteDisplay(lo), ByteDisplay(hi))
                }
            })
            .collect();
        parts.extend(self.set.iter().map(|&b| format!("{}", ByteDisplay(b))));
        format!("[{}]", parts.join(", "))
    }
}

struct ByteDisplay(u8);

impl std::fmt::Display for ByteDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let b = self.0;
        if b.is_ascii_graphic() || b == b' ' {
            write!(f, "{}", b as char)
        } else {
            write!(f, "0x{b:02x}")
        }
    }
}

/// A node in the combinator tree.
#[derive(Clone, Debug)]
pub enum Node {
    Literal(Vec<u8>),
    AnyByte(usize),
    Class(ByteClass),
    Sequence(Vec<Node>),
    Choice(Vec<Node>),
    Optional(Box<Node>),
    Star(Box<Node>),
    Plus(Box<Node>),
    /// `max = None` means unbounded.
    Repeat(Box<Node>, usize, Option<usize>),
    And(Box<Node>),
    Not(Box<Node>),
    Call(Symbol),
    CaptureSubstring(Box<Node>),
    CapturePosition,
    CaptureConstant(Value),
    CaptureTable(Box<Node>),
}

impl Node {
    pub fn literal(bytes: impl Into<Vec<u8>>) -> Self {
        Node::Literal(bytes.into())
    }

    pub fn sequence(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(children.into_iter().collect())
    }

    pub fn choice(alts: impl IntoIterator<Item = Node>) -> Self {
        Node::Choice(alts.into_iter().collect())
    }

    pub fn optional(child: Node) -> Self {
        Node::Optional(Box::new(child))
    }

    pub fn star(child: Node) -> Self {
        Node::Star(Box::new(child))
    }

    pub fn plus(child: Node) -> Self {
        Node::Plus(Box::new(child))
    }

    pub fn and(child: Node) -> Self {
        Node::And(Box::new(child))
    }

    pub fn not(child: Node) -> Self {
        Node::Not(Box::new(child))
    }

    pub fn substring(child: Node) -> Self {
        Node::CaptureSubstring(Box::new(child))
    }

    pub fn table(child: Node) -> Self {
        Node::CaptureTable(Box::new(child))
    }

    /// Visit every `Call` target reachable from this node (non-recursive
    /// through calls themselves — used for validating that a grammar has
    /// no dangling rule references).
    pub fn for_each_call(&self, mut f: impl FnMut(Symbol)) {
        self.for_each_call_inner(&mut f);
    }

    fn for_each_call_inner(&self, f: &mut impl FnMut(Symbol)) {
        match self {
            Node::Call(name) => f(*name),
            Node::Literal(_) | Node::AnyByte(_) | Node::Class(_) => {}
            Node::Sequence(children) | Node::Choice(children) => {
                for c in children {
                    c.for_each_call_inner(f);
                }
            }
            Node::Optional(c)
            | Node::Star(c)
            | Node::Plus(c)
            | Node::Repeat(c, _, _)
            | Node::And(c)
            | Node::Not(c)
            | Node::CaptureSubstring(c)
            | Node::CaptureTable(c) => c.for_each_call_inner(f),
            Node::CapturePosition | Node::CaptureConstant(_) => {}
        }
    }
}
