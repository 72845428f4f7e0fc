use crate::Interner;

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("foo");
    let b = interner.intern("foo");
    let c = interner.intern("bar");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = Interner::new();

    let sym = interner.intern("hello");
    assert_eq!(interner.resolve(sym), "hello");
}

#[test]
fn symbols_are_copy() {
    let mut interner = Interner::new();
    let sym = interner.intern("x");

    let copy = sym;
    assert_eq!(sym, copy);
}

#[test]
fn symbol_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    // z was inserted first, so z < a by insertion order
    assert!(z < a);
}

