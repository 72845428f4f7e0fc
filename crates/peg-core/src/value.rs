//! The capture value type produced by a parse.
//!
//! `Value` is a closed, six-variant tagged union. A list is the only
//! compound kind and owns its elements; there is no reflection, only
//! pattern matching.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::Colors;

/// A single captured value, or an aggregate of them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    /// A captured span of input bytes. Not required to be valid UTF-8;
    /// formatting and serialization fall back to a lossy decode.
    Bytes(Vec<u8>),
    /// The aggregate produced by a table capture, in push order.
    List(Vec<Value>),
}

impl Value {
    pub fn bytes(s: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Bytes(b) => serializer.serialize_str(&String::from_utf8_lossy(b)),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl Value {
    /// Format value as colored JSON-like text.
    ///
    /// Color scheme (jq-inspired):
    /// - Byte-string captures: green
    /// - null: dim
    /// - numbers, booleans: normal
    /// - structure `[],`: dim
    pub fn format(&self, pretty: bool, colors: Colors) -> String {
        let mut out = String::new();
        format_value(&mut out, self, &colors, pretty, 0);
        out
    }
}

fn format_value(out: &mut String, value: &Value, c: &Colors, pretty: bool, indent: usize) {
    match value {
        Value::Null => {
            out.push_str(c.dim);
            out.push_str("null");
            out.push_str(c.reset);
        }
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Bytes(b) => {
            out.push_str(c.green);
            out.push('"');
            out.push_str(&escape_json_string(&String::from_utf8_lossy(b)));
            out.push('"');
            out.push_str(c.reset);
        }
        Value::List(items) => format_list(out, items, c, pretty, indent),
    }
}

fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.is_finite() {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

fn format_list(out: &mut String, items: &[Value], c: &Colors, pretty: bool, indent: usize) {
    out.push_str(c.dim);
    out.push('[');
    out.push_str(c.reset);

    if items.is_empty() {
        out.push_str(c.dim);
        out.push(']');
        out.push_str(c.reset);
        return;
    }

    let elem_indent = if pretty { indent + 2 } else { 0 };

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(c.dim);
            out.push(',');
            out.push_str(c.reset);
        }
        if pretty {
            out.push('\n');
            out.push_str(&" ".repeat(elem_indent));
        }
        format_value(out, item, c, pretty, elem_indent);
    }

    if pretty {
        out.push('\n');
        out.push_str(&" ".repeat(indent));
    }
    out.push_str(c.dim);
    out.push(']');
    out.push_str(c.reset);
}

fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}
