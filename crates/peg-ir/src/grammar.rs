//! The rule table: a named collection of rule bodies plus an entry rule.
//!
//! Rules are stored name-keyed (§9 design note: "represent rules by
//! identifier and look them up in a rule table; do not embed rule bodies
//! as direct owning pointers that would force a particular topological
//! order"). `IndexMap` preserves insertion order, which `dump` relies on
//! so grammar definitions print in the order a front-end declared them.

use indexmap::IndexMap;
use peg_core::{Interner, Symbol};

use crate::error::GrammarError;
use crate::node::Node;

/// A complete grammar: a rule table plus the name of the entry rule.
#[derive(Debug)]
pub struct Grammar {
    interner: Interner,
    rules: IndexMap<Symbol, Node>,
    entry: Symbol,
}

impl Grammar {
    pub fn rule(&self, name: Symbol) -> Option<&Node> {
        self.rules.get(&name)
    }

    pub fn entry(&self) -> Symbol {
        self.entry
    }

    pub fn entry_rule(&self) -> &Node {
        self.rules
            .get(&self.entry)
            .expect("entry rule validated at build time")
    }

    pub fn rule_name(&self, sym: Symbol) -> &str {
        self.interner
            .try_resolve(sym)
            .expect("symbol from this grammar's interner")
    }

    pub fn rules(&self) -> impl Iterator<Item = (Symbol, &Node)> {
        self.rules.iter().map(|(&sym, node)| (sym, node))
    }

    /// Check every `Call` target resolves within this grammar's rule table.
    /// Forward references are fine — only *dangling* references are an error.
    fn validate(&self) -> Result<(), GrammarError> {
        if !self.rules.contains_key(&self.entry) {
            return Err(GrammarError::UnknownEntry(
                self.rule_name(self.entry).to_owned(),
            ));
        }
        for (&caller, body) in &self.rules {
            let mut err = None;
            body.for_each_call(|callee| {
                if err.is_none() && !self.rules.contains_key(&callee) {
                    err = Some(GrammarError::UnknownRule {
                        caller: self.rule_name(caller).to_owned(),
                        callee: self.rule_name(callee).to_owned(),
                    });
                }
            });
            if let Some(err) = err {
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Incrementally builds a [`Grammar`], interning rule names as they're added.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    interner: Interner,
    rules: IndexMap<Symbol, Node>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a rule name without defining it yet — useful for `Call` sites
    /// that forward-reference a rule defined later in the same builder pass.
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    pub fn add_rule(&mut self, name: &str, body: Node) -> Result<Symbol, GrammarError> {
        let sym = self.interner.intern(name);
        if self.rules.contains_key(&sym) {
            return Err(GrammarError::DuplicateRule(name.to_owned()));
        }
        self.rules.insert(sym, body);
        Ok(sym)
    }

    pub fn build(self, entry: &str) -> Result<Grammar, GrammarError> {
        let mut interner = self.interner;
        let entry = interner.intern(entry);
        let grammar = Grammar {
            interner,
            rules: self.rules,
            entry,
        };
        grammar.validate()?;
        Ok(grammar)
    }
}
