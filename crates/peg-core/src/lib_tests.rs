use crate::Colors;
use crate::Value;

#[test]
fn format_scalars_without_color() {
    assert_eq!(Value::Int(42).format(false, Colors::OFF), "42");
    assert_eq!(Value::Bool(true).format(false, Colors::OFF), "true");
    assert_eq!(Value::Null.format(false, Colors::OFF), "null");
    assert_eq!(Value::Float(2.0).format(false, Colors::OFF), "2.0");
}

#[test]
fn format_bytes_escapes_quotes() {
    let v = Value::bytes(b"he said \"hi\"".to_vec());
    assert_eq!(v.format(false, Colors::OFF), "\"he said \\\"hi\\\"\"");
}

#[test]
fn format_list_compact() {
    let v = Value::List(vec![Value::bytes(b"number".to_vec()), Value::Int(1)]);
    assert_eq!(v.format(false, Colors::OFF), "[\"number\",1]");
}

#[test]
fn format_empty_list() {
    assert_eq!(Value::List(vec![]).format(false, Colors::OFF), "[]");
}

#[test]
fn as_list_and_as_bytes() {
    let list = Value::List(vec![Value::Int(1)]);
    assert_eq!(list.as_list().unwrap().len(), 1);
    assert!(list.as_bytes().is_none());

    let bytes = Value::bytes(b"abc".to_vec());
    assert_eq!(bytes.as_bytes().unwrap(), b"abc");
}
