//! The grammar data model.
//!
//! A [`Grammar`] maps each nonterminal name to its ordered list of
//! alternatives. Both the order of the nonterminals and the order of each
//! nonterminal's alternatives are preserved, since generated names and the
//! serialized output both depend on them.
//!
//! Nonterminal names are stored without their surrounding brackets; the
//! brackets are added back when a grammar is written out with `Display`:
//!
//! ```
//! use grammar::{Grammar, Production, Symbol};
//!
//! let mut grammar = Grammar::new();
//! grammar.push("S", Production::pair(
//!     Symbol::nonterminal("A"),
//!     Symbol::nonterminal("A"),
//! ));
//! grammar.push("A", Production::unit(Symbol::terminal("a")));
//! assert_eq!(grammar.to_string(), "<S> -> <A> <A>\n<A> -> a\n");
//! ```
//!
//! [`Grammar`]: struct.Grammar.html

mod error;
mod symbol;

use std::fmt;

use indexmap::IndexMap;

pub use error::GrammarError;
pub use symbol::{Production, Symbol};

/// A context-free grammar with insertion-ordered rules.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grammar {
    rules: IndexMap<String, Vec<Production>>,
    // When unset, the first declared nonterminal is the start symbol.
    start: Option<String>,
}

impl Grammar {
    /// Creates a new empty `Grammar`.
    pub fn new() -> Grammar {
        Grammar {
            rules: IndexMap::new(),
            start: None,
        }
    }

    /// Builds a grammar from already classified rules and the name of its
    /// start nonterminal. The start nonterminal does not have to be the first
    /// rule, and it is not checked to have any rules at all.
    pub fn from_rules<S: Into<String>>(
        start: S,
        rules: IndexMap<String, Vec<Production>>,
    ) -> Grammar {
        Grammar {
            rules,
            start: Some(start.into()),
        }
    }

    /// Appends an alternative to a nonterminal, declaring the nonterminal if
    /// it has not been seen before.
    pub fn push<S: Into<String>>(&mut self, name: S, production: Production) {
        self.rules
            .entry(name.into())
            .or_insert_with(Vec::new)
            .push(production);
    }

    /// Appends several alternatives to a nonterminal.
    pub fn extend_rule<S, I>(&mut self, name: S, productions: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = Production>,
    {
        self.rules
            .entry(name.into())
            .or_insert_with(Vec::new)
            .extend(productions);
    }

    /// Declares a nonterminal ahead of every existing one.
    pub fn prepend_rule<S: Into<String>>(
        &mut self,
        name: S,
        productions: Vec<Production>,
    ) {
        let mut rules = IndexMap::with_capacity(self.rules.len() + 1);
        rules.insert(name.into(), productions);
        for (name, productions) in self.rules.drain(..) {
            rules.entry(name).or_insert(productions);
        }
        self.rules = rules;
    }

    /// Swaps in a whole new set of rules at once. The start symbol is kept.
    pub fn replace_rules(&mut self, rules: IndexMap<String, Vec<Production>>) {
        self.rules = rules;
    }

    /// The start nonterminal, or `None` for an empty grammar without an
    /// explicit start.
    pub fn start(&self) -> Option<&str> {
        match &self.start {
            Some(start) => Some(start),
            None => self.rules.keys().next().map(|x| x.as_str()),
        }
    }

    pub fn set_start<S: Into<String>>(&mut self, name: S) {
        self.start = Some(name.into());
    }

    /// The alternatives of a nonterminal, if it is declared.
    pub fn productions(&self, name: &str) -> Option<&[Production]> {
        self.rules.get(name).map(|x| x.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Declared nonterminal names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|x| x.as_str())
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &[Production])> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn rules_mut(
        &mut self,
    ) -> impl Iterator<Item = (&str, &mut Vec<Production>)> {
        self.rules.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared nonterminals.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of alternatives across all nonterminals.
    pub fn production_count(&self) -> usize {
        self.rules.values().map(|x| x.len()).sum()
    }
}

impl fmt::Display for Grammar {
    // One line per nonterminal: `<name> -> sym sym | sym`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, productions) in self.rules.iter() {
            let alts: Vec<String> =
                productions.iter().map(|x| x.to_string()).collect();
            write!(f, "<{}> -> {}\n", name, alts.join(" | "))?;
        }
        Ok(())
    }
}
