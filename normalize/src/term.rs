use grammar::{Grammar, Production, Symbol};
use indexmap::IndexMap;
use log::debug;

use crate::error::NormalizeError;
use crate::names::{self, define, Namespace};

/// Replaces every terminal inside a production of length two or more with a
/// nonterminal that derives only that terminal. All occurrences of the same
/// terminal share one such nonterminal. Productions of length one are left
/// untouched, whatever they contain.
pub fn isolate_terminals(
    mut grammar: Grammar,
) -> Result<Grammar, NormalizeError> {
    let mut namespace = Namespace::new(&grammar);
    // terminal text -> the nonterminal standing in for it
    let mut isolated: IndexMap<String, String> = IndexMap::new();

    for (_, productions) in grammar.rules_mut() {
        for production in productions.iter_mut().filter(|x| x.len() > 1) {
            for symbol in production.symbols_mut() {
                if let Symbol::Terminal(text) = symbol {
                    let name = isolated
                        .entry(text.clone())
                        .or_insert_with(|| {
                            namespace.claim(names::terminal_name(text))
                        })
                        .clone();
                    *symbol = Symbol::Nonterminal(name);
                }
            }
        }
    }

    debug!("isolated {} terminals", isolated.len());
    for (text, name) in isolated {
        let production = Production::unit(Symbol::Terminal(text));
        define(&mut grammar, name, vec![production])?;
    }
    Ok(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metagrammar::build_grammar;

    fn nt(name: &str) -> Symbol {
        Symbol::nonterminal(name)
    }

    fn t(text: &str) -> Symbol {
        Symbol::terminal(text)
    }

    #[test]
    fn it_isolates_terminals() {
        let grammar = isolate_terminals(build_grammar! {
            S: A "b" A;
            A: "a";
        })
        .unwrap();

        assert_eq!(
            grammar.productions("S").unwrap()[0].symbols(),
            &[nt("A"), nt("$term.b"), nt("A")]
        );
        assert_eq!(
            grammar.productions("$term.b").unwrap(),
            &[Production::unit(t("b"))]
        );
        // Single terminal productions stay as they are
        assert_eq!(
            grammar.productions("A").unwrap(),
            &[Production::unit(t("a"))]
        );
        assert_eq!(grammar.len(), 3);
    }

    #[test]
    fn it_reuses_isolated_terminals() {
        let grammar = isolate_terminals(build_grammar! {
            S: "x" "x" | A "x";
            A: "x" "y" | "x";
        })
        .unwrap();

        let names: Vec<&str> = grammar.names().collect();
        assert_eq!(names, vec!["S", "A", "$term.x", "$term.y"]);
        let s = grammar.productions("S").unwrap();
        assert_eq!(s[0].symbols(), &[nt("$term.x"), nt("$term.x")]);
        assert_eq!(s[1].symbols(), &[nt("A"), nt("$term.x")]);
        let a = grammar.productions("A").unwrap();
        assert_eq!(a[0].symbols(), &[nt("$term.x"), nt("$term.y")]);
        assert_eq!(a[1].symbols(), &[t("x")]);
    }

    #[test]
    fn it_leaves_unit_productions_alone() {
        let input = build_grammar! {
            S: A | "s";
            A: "a";
        };
        let grammar = isolate_terminals(input.clone()).unwrap();
        assert_eq!(grammar, input);
    }

    #[test]
    fn it_avoids_taken_terminal_names() {
        let mut grammar = Grammar::new();
        grammar.push(
            "S",
            Production::pair(nt("$term.a"), t("a")),
        );
        grammar.push("$term.a", Production::unit(t("z")));
        let grammar = isolate_terminals(grammar).unwrap();
        assert_eq!(
            grammar.productions("S").unwrap()[0].symbols(),
            &[nt("$term.a"), nt("$term.a'")]
        );
        assert_eq!(
            grammar.productions("$term.a'").unwrap(),
            &[Production::unit(t("a"))]
        );
    }
}
