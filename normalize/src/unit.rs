use grammar::{Grammar, Production};
use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::error::NormalizeError;

/// Removes unit productions (`A -> B`).
///
/// Each nonterminal receives the non-unit productions of every nonterminal
/// reachable from it through zero or more unit productions, its unit
/// closure, in the order they are first reached and without duplicates.
/// Closures are computed for all nonterminals against the unchanged grammar
/// before any rule is replaced, so chains of any length resolve fully.
///
/// Unit cycles (`A -> B`, `B -> A`) are not errors. Every member of a cycle
/// has every other member in its closure, so all of them end up with the
/// same non-unit productions.
///
/// Fails if some nonterminal's closure contains no non-unit production at
/// all, since such a nonterminal derives no terminal string.
pub fn eliminate_units(
    mut grammar: Grammar,
) -> Result<Grammar, NormalizeError> {
    let mut resolved = IndexMap::with_capacity(grammar.len());

    for name in grammar.names() {
        let closure = unit_closure(&grammar, name);
        if on_unit_cycle(&grammar, name, &closure) {
            debug!("<{}> is on a unit cycle", name);
        }

        let mut productions: IndexSet<&Production> = IndexSet::new();
        for member in closure.iter() {
            for production in grammar.productions(member).unwrap_or(&[]) {
                if production.unit_target().is_none() {
                    productions.insert(production);
                }
            }
        }
        if productions.is_empty() {
            return Err(NormalizeError::UnresolvableGrammar {
                nonterminal: name.to_owned(),
            });
        }

        let productions: Vec<Production> =
            productions.into_iter().cloned().collect();
        resolved.insert(name.to_owned(), productions);
    }

    grammar.replace_rules(resolved);
    Ok(grammar)
}

/// Follows unit productions using DFS to build the set of nonterminals
/// that are reachable from `name` using only unit productions. `name` itself
/// is always the first member.
fn unit_closure<'a>(grammar: &'a Grammar, name: &'a str) -> IndexSet<&'a str> {
    let mut stack = vec![name];
    let mut states = IndexSet::new();
    while let Some(state) = stack.pop() {
        if states.contains(state) {
            continue;
        }
        states.insert(state);
        if let Some(productions) = grammar.productions(state) {
            // pushed in reverse so alternatives are visited in order
            for production in productions.iter().rev() {
                if let Some(next) = production.unit_target() {
                    stack.push(next);
                }
            }
        }
    }
    states
}

fn on_unit_cycle(
    grammar: &Grammar,
    name: &str,
    closure: &IndexSet<&str>,
) -> bool {
    closure.iter().any(|member| {
        grammar.productions(member).map_or(false, |productions| {
            productions.iter().any(|x| x.unit_target() == Some(name))
        })
    })
}
