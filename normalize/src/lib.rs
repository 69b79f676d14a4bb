//! Conversion of context-free grammars into Chomsky Normal Form.
//!
//! In Chomsky Normal Form every production is either a single terminal or
//! exactly two nonterminals. The conversion runs four stages, strictly in
//! this order since each relies on the shape the previous ones left behind:
//!
//! 1. [`wrap_start`] adds a new start symbol that refers to the old one.
//! 2. [`isolate_terminals`] moves terminals out of productions longer than
//!    one symbol.
//! 3. [`binarize`] splits productions longer than two symbols into chains
//!    of pairs.
//! 4. [`eliminate_units`] replaces productions that are a single
//!    nonterminal with the productions that nonterminal resolves to.
//!
//! Empty productions are not supported, and the conversion neither removes
//! useless nonterminals nor checks that referenced nonterminals exist.
//!
//! ```
//! use metagrammar::build_grammar;
//! use normalize::{check_cnf, to_cnf};
//!
//! let grammar = to_cnf(build_grammar! {
//!     S: A B "c";
//!     A: "a";
//!     B: "b";
//! })
//! .unwrap();
//!
//! assert_eq!(check_cnf(&grammar), Ok(()));
//! assert_eq!(
//!     grammar.to_string(),
//!     "<$start> -> <A> <$bin.S.0.1>\n\
//!      <S> -> <A> <$bin.S.0.1>\n\
//!      <A> -> a\n\
//!      <B> -> b\n\
//!      <$term.c> -> c\n\
//!      <$bin.S.0.1> -> <B> <$term.c>\n"
//! );
//! ```
//!
//! [`wrap_start`]: fn.wrap_start.html
//! [`isolate_terminals`]: fn.isolate_terminals.html
//! [`binarize`]: fn.binarize.html
//! [`eliminate_units`]: fn.eliminate_units.html

mod binary;
mod check;
mod error;
pub mod names;
mod start;
mod term;
mod unit;

use grammar::Grammar;
use log::debug;

pub use crate::binary::binarize;
pub use crate::check::{check_cnf, CnfViolation};
pub use crate::error::NormalizeError;
pub use crate::start::wrap_start;
pub use crate::term::isolate_terminals;
pub use crate::unit::eliminate_units;

type Stage = fn(Grammar) -> Result<Grammar, NormalizeError>;

const STAGES: [(&str, Stage); 4] = [
    ("START", wrap_start),
    ("TERM", isolate_terminals),
    ("BIN", binarize),
    ("UNIT", eliminate_units),
];

/// Converts a grammar into an equivalent grammar in Chomsky Normal Form.
pub fn to_cnf(grammar: Grammar) -> Result<Grammar, NormalizeError> {
    STAGES.iter().try_fold(grammar, |grammar, (name, stage)| {
        let grammar = stage(grammar)?;
        debug!(
            "{}: {} nonterminals, {} productions",
            name,
            grammar.len(),
            grammar.production_count()
        );
        Ok(grammar)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar::{Production, Symbol};
    use metagrammar::build_grammar;
    use std::collections::HashSet;

    fn nt(name: &str) -> Symbol {
        Symbol::nonterminal(name)
    }

    fn t(text: &str) -> Symbol {
        Symbol::terminal(text)
    }

    #[test]
    fn it_converts_the_example_grammar() {
        let grammar = to_cnf(build_grammar! {
            S: A B "c";
            A: "a";
            B: "b";
        })
        .unwrap();

        assert_eq!(grammar.start(), Some("$start"));
        let tail = Production::pair(nt("A"), nt("$bin.S.0.1"));
        assert_eq!(grammar.productions("$start").unwrap(), &[tail.clone()]);
        assert_eq!(grammar.productions("S").unwrap(), &[tail]);
        assert_eq!(
            grammar.productions("$bin.S.0.1").unwrap(),
            &[Production::pair(nt("B"), nt("$term.c"))]
        );
        assert_eq!(
            grammar.productions("$term.c").unwrap(),
            &[Production::unit(t("c"))]
        );
        assert_eq!(grammar.productions("A").unwrap(), &[Production::unit(t("a"))]);
        assert_eq!(grammar.productions("B").unwrap(), &[Production::unit(t("b"))]);
    }

    #[test]
    fn it_produces_cnf() {
        let grammar = to_cnf(build_grammar! {
            Expr: Expr "+" Term | Term;
            Term: Term "*" Factor | Factor;
            Factor: "(" Expr ")" | "x" | "y";
        })
        .unwrap();

        assert_eq!(check_cnf(&grammar), Ok(()));
        for (_, productions) in grammar.rules() {
            for production in productions {
                assert!(production.len() <= 2);
                match production.symbols() {
                    [s] => assert!(s.is_terminal()),
                    [a, b] => assert!(!a.is_terminal() && !b.is_terminal()),
                    _ => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn it_shares_one_rule_per_terminal() {
        let grammar = to_cnf(build_grammar! {
            S: A "t" | "t" A;
            A: "a";
        })
        .unwrap();

        let terminal_rules: Vec<&str> = grammar
            .rules()
            .filter(|(_, ps)| ps.len() == 1 && ps[0] == Production::unit(t("t")))
            .map(|(name, _)| name)
            .collect();
        assert_eq!(terminal_rules, vec!["$term.t"]);
        assert_eq!(
            grammar.productions("S").unwrap(),
            &[
                Production::pair(nt("A"), nt("$term.t")),
                Production::pair(nt("$term.t"), nt("A")),
            ]
        );
    }

    #[test]
    fn it_generates_distinct_names() {
        let grammar = to_cnf(build_grammar! {
            S: A A A A | B B B;
            A: "a" "a" "a";
            B: "b";
        })
        .unwrap();
        let names: Vec<&str> = grammar.names().collect();
        let unique: HashSet<&str> = names.iter().cloned().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn it_is_deterministic() {
        let input = build_grammar! {
            S: A "x" B "y" | B;
            A: "x" | S S S;
            B: A | "y";
        };
        let first = to_cnf(input.clone()).unwrap();
        let second = to_cnf(input).unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn it_converts_cyclic_grammars() {
        let grammar = to_cnf(build_grammar! {
            A: B | P Q;
            B: A;
            P: "p";
            Q: "q";
        })
        .unwrap();

        let pq = Production::pair(nt("P"), nt("Q"));
        assert_eq!(grammar.productions("A").unwrap(), &[pq.clone()]);
        assert_eq!(grammar.productions("B").unwrap(), &[pq.clone()]);
        assert_eq!(grammar.productions("$start").unwrap(), &[pq]);
    }

    #[test]
    fn it_reports_stage_errors() {
        assert_eq!(to_cnf(Grammar::new()), Err(NormalizeError::EmptyGrammar));
        assert_eq!(
            to_cnf(build_grammar! { S: T; T: S; }),
            Err(NormalizeError::UnresolvableGrammar {
                nonterminal: "$start".into()
            })
        );
    }
}
