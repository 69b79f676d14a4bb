use std::fmt;

use crate::error::GrammarError;

/// A grammar symbol. Whether a token names a nonterminal is decided once,
/// when the grammar is read, and carried in the variant from then on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

impl Symbol {
    pub fn terminal<S: Into<String>>(text: S) -> Symbol {
        Symbol::Terminal(text.into())
    }

    pub fn nonterminal<S: Into<String>>(name: S) -> Symbol {
        Symbol::Nonterminal(name.into())
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            Symbol::Terminal(_) => true,
            Symbol::Nonterminal(_) => false,
        }
    }

    /// The referenced name if this symbol is a nonterminal.
    pub fn as_nonterminal(&self) -> Option<&str> {
        match self {
            Symbol::Nonterminal(name) => Some(name),
            Symbol::Terminal(_) => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(text) => write!(f, "{}", text),
            Symbol::Nonterminal(name) => write!(f, "<{}>", name),
        }
    }
}

/// One alternative of a nonterminal: a nonempty, ordered sequence of symbols.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Production {
    symbols: Vec<Symbol>,
}

impl Production {
    /// Creates a production from its symbols. Empty productions are not
    /// part of the grammars we handle, so they are rejected here.
    pub fn new(symbols: Vec<Symbol>) -> Result<Production, GrammarError> {
        if symbols.is_empty() {
            return Err(GrammarError::EmptyProduction);
        }
        Ok(Production { symbols })
    }

    /// A production of length 1.
    pub fn unit(symbol: Symbol) -> Production {
        Production {
            symbols: vec![symbol],
        }
    }

    /// A production of length 2.
    pub fn pair(first: Symbol, second: Symbol) -> Production {
        Production {
            symbols: vec![first, second],
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbols can be replaced in place, but a production never changes
    /// length.
    pub fn symbols_mut(&mut self) -> &mut [Symbol] {
        &mut self.symbols
    }

    /// If this is a unit production (a single nonterminal), the name of the
    /// nonterminal it refers to.
    pub fn unit_target(&self) -> Option<&str> {
        match &self.symbols[..] {
            [symbol] => symbol.as_nonterminal(),
            _ => None,
        }
    }

    /// True for a production consisting of exactly one terminal.
    pub fn is_terminal_unit(&self) -> bool {
        match &self.symbols[..] {
            [symbol] => symbol.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbols: Vec<String> =
            self.symbols.iter().map(|x| x.to_string()).collect();
        write!(f, "{}", symbols.join(" "))
    }
}
