//! Names for generated nonterminals.
//!
//! Every stage derives its candidate names from where the new nonterminal
//! comes from (the stage, the nonterminal it was split off from, and its
//! position there), so the output depends only on the input grammar. All
//! candidates start with `$`. A candidate that is already taken, e.g. because
//! the input itself uses `$` names, is primed (`'`) until it is free.

use std::collections::HashSet;

use grammar::{Grammar, Production};
use log::trace;

use crate::error::NormalizeError;

/// The set of names in use while a grammar is being transformed.
pub struct Namespace {
    taken: HashSet<String>,
}

impl Namespace {
    /// Seeds the namespace with every declared and every referenced name.
    pub fn new(grammar: &Grammar) -> Namespace {
        let mut taken: HashSet<String> =
            grammar.names().map(|x| x.to_owned()).collect();
        for (_, productions) in grammar.rules() {
            for production in productions {
                for symbol in production.symbols() {
                    if let Some(name) = symbol.as_nonterminal() {
                        taken.insert(name.to_owned());
                    }
                }
            }
        }
        if let Some(start) = grammar.start() {
            taken.insert(start.to_owned());
        }
        Namespace { taken }
    }

    /// Reserves `candidate`, or the first free primed variant of it.
    pub fn claim(&mut self, candidate: String) -> String {
        let mut name = candidate;
        while self.taken.contains(&name) {
            name.push('\'');
        }
        self.taken.insert(name.clone());
        name
    }
}

/// Name of the wrapper around the original start symbol.
pub fn start_name() -> String {
    "$start".to_owned()
}

/// Name of the nonterminal standing in for a terminal. Angle brackets in
/// the terminal are escaped so the name can be written as `<name>`.
pub fn terminal_name(text: &str) -> String {
    let text = text.replace('<', "&lt;").replace('>', "&gt;");
    format!("$term.{}", text)
}

/// Name of the `position`th tail split off the `alt`th alternative of
/// `origin`.
pub fn tail_name(origin: &str, alt: usize, position: usize) -> String {
    format!("$bin.{}.{}.{}", origin, alt, position)
}

/// Adds a generated rule. Generated names are claimed from a `Namespace`
/// first, so finding the name already defined means the namespace was
/// bypassed.
pub fn define(
    grammar: &mut Grammar,
    name: String,
    productions: Vec<Production>,
) -> Result<(), NormalizeError> {
    if grammar.contains(&name) {
        return Err(NormalizeError::FreshNameCollision { name });
    }
    trace!("defining <{}>", name);
    grammar.extend_rule(name, productions);
    Ok(())
}
