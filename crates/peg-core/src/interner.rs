//! String interning for rule names.
//!
//! A grammar's `Call` nodes and rule table need to compare and hash rule
//! names on every step of evaluation; doing that against a `String` would
//! mean a hash and byte-compare per lookup. `Interner` hands out a `Symbol`
//! — a small `Copy` handle — the first time a name is seen, and every later
//! mention of the same name resolves to the same handle.

use std::collections::HashMap;

/// A handle to an interned rule name.
///
/// Comparing two symbols is a single integer comparison. Symbols order by
/// interning order, not by the string's own ordering — use
/// `Interner::resolve` if you need the name itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// Deduplicates rule names and hands out `Symbol` handles for them.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<String, Symbol>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a rule name, returning its `Symbol`.
    ///
    /// Interning the same name twice (e.g. a rule's definition site and an
    /// earlier forward-referencing `Call`) returns the same `Symbol`.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.map.get(s) {
            return sym;
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), sym);
        sym
    }

    /// Resolve a Symbol back to its string.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }

    /// Try to resolve a Symbol, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, sym: Symbol) -> Option<&str> {
        self.strings.get(sym.0 as usize).map(|s| s.as_str())
    }

    /// Number of interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the interner is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
