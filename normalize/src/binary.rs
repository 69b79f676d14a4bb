use grammar::{Grammar, Production, Symbol};
use log::debug;

use crate::error::NormalizeError;
use crate::names::{self, define, Namespace};

/// Splits every production longer than two symbols into a right-leaning
/// chain of pairs:
///
/// ```text
/// A -> X1 X2 X3 X4
/// ```
///
/// becomes
///
/// ```text
/// A  -> X1 T1
/// T1 -> X2 T2
/// T2 -> X3 X4
/// ```
///
/// Each chain gets its own nonterminals, named after the rule and
/// alternative they were split from.
pub fn binarize(mut grammar: Grammar) -> Result<Grammar, NormalizeError> {
    let mut namespace = Namespace::new(&grammar);
    let mut tails: Vec<(String, Production)> = vec![];

    for (origin, productions) in grammar.rules_mut() {
        for (alt, production) in productions.iter_mut().enumerate() {
            let n = production.len();
            if n <= 2 {
                continue;
            }
            let symbols = production.symbols().to_vec();
            let chain: Vec<String> = (1..n - 1)
                .map(|position| {
                    namespace.claim(names::tail_name(origin, alt, position))
                })
                .collect();

            *production = Production::pair(
                symbols[0].clone(),
                Symbol::Nonterminal(chain[0].clone()),
            );
            for i in 1..n - 1 {
                // The last pair holds the last two symbols directly
                let rest = if i + 1 < n - 1 {
                    Symbol::Nonterminal(chain[i].clone())
                } else {
                    symbols[n - 1].clone()
                };
                let pair = Production::pair(symbols[i].clone(), rest);
                tails.push((chain[i - 1].clone(), pair));
            }
        }
    }

    debug!("split off {} tail productions", tails.len());
    for (name, production) in tails {
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

    #[test]
    fn it_splits_long_productions() {
        let grammar = binarize(build_grammar! {
            A: W X Y Z;
        })
        .unwrap();

        let names: Vec<&str> = grammar.names().collect();
        assert_eq!(names, vec!["A", "$bin.A.0.1", "$bin.A.0.2"]);
        assert_eq!(
            grammar.productions("A").unwrap(),
            &[Production::pair(nt("W"), nt("$bin.A.0.1"))]
        );
        assert_eq!(
            grammar.productions("$bin.A.0.1").unwrap(),
            &[Production::pair(nt("X"), nt("$bin.A.0.2"))]
        );
        assert_eq!(
            grammar.productions("$bin.A.0.2").unwrap(),
            &[Production::pair(nt("Y"), nt("Z"))]
        );
    }

    #[test]
    fn it_splits_each_alternative_separately() {
        let grammar = binarize(build_grammar! {
            A: X Y Z | X Y | X Y Z;
        })
        .unwrap();

        let a = grammar.productions("A").unwrap();
        assert_eq!(a[0], Production::pair(nt("X"), nt("$bin.A.0.1")));
        assert_eq!(a[1], Production::pair(nt("X"), nt("Y")));
        assert_eq!(a[2], Production::pair(nt("X"), nt("$bin.A.2.1")));
        assert_eq!(
            grammar.productions("$bin.A.0.1").unwrap(),
            grammar.productions("$bin.A.2.1").unwrap()
        );
        assert_eq!(grammar.len(), 3);
    }

    #[test]
    fn it_leaves_short_productions_alone() {
        let input = build_grammar! {
            A: X Y | "a";
            X: Y;
        };
        assert_eq!(binarize(input.clone()).unwrap(), input);
    }

    #[test]
    fn it_keeps_output_within_two_symbols() {
        let grammar = binarize(build_grammar! {
            S: A B C D E F G H;
            A: B C D;
        })
        .unwrap();
        for (_, productions) in grammar.rules() {
            assert!(productions.iter().all(|x| x.len() <= 2));
        }
        // an 8 symbol production needs 6 tails, a 3 symbol one needs 1
        assert_eq!(grammar.len(), 2 + 6 + 1);
    }
}
