use grammar::{Grammar, Production, Symbol};
use log::debug;

use crate::error::NormalizeError;
use crate::names::{self, Namespace};

/// Gives the grammar a new start symbol whose only production refers to the
/// old one. The new rule is declared first, so the output still follows the
/// first-declared-is-start convention.
pub fn wrap_start(mut grammar: Grammar) -> Result<Grammar, NormalizeError> {
    let original = match grammar.start() {
        Some(start) if !grammar.is_empty() => start.to_owned(),
        _ => return Err(NormalizeError::EmptyGrammar),
    };
    let start = Namespace::new(&grammar).claim(names::start_name());
    if grammar.contains(&start) {
        return Err(NormalizeError::FreshNameCollision { name: start });
    }
    debug!("wrapping start symbol <{}> in <{}>", original, start);
    let production = Production::unit(Symbol::Nonterminal(original));
    grammar.prepend_rule(start.clone(), vec![production]);
    grammar.set_start(start);
    Ok(grammar)
}
