use grammar::Grammar;
use thiserror::Error;

/// The first rule found breaking Chomsky Normal Form.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum CnfViolation {
    #[error("<{nonterminal}> has a production of length {len}: {production}")]
    TooLong {
        nonterminal: String,
        len: usize,
        production: String,
    },
    #[error("<{nonterminal}> pairs a terminal with another symbol: {production}")]
    TerminalInPair {
        nonterminal: String,
        production: String,
    },
    #[error("<{nonterminal}> has the unit production <{target}>")]
    UnitProduction { nonterminal: String, target: String },
}

/// Checks that every production is either a single terminal or a pair of
/// nonterminals.
pub fn check_cnf(grammar: &Grammar) -> Result<(), CnfViolation> {
    for (name, productions) in grammar.rules() {
        for production in productions {
            if production.is_terminal_unit() {
                continue;
            }
            if let Some(target) = production.unit_target() {
                return Err(CnfViolation::UnitProduction {
                    nonterminal: name.to_owned(),
                    target: target.to_owned(),
                });
            }
            match production.len() {
                2 => {
                    if production.symbols().iter().any(|x| x.is_terminal()) {
                        return Err(CnfViolation::TerminalInPair {
                            nonterminal: name.to_owned(),
                            production: production.to_string(),
                        });
                    }
                }
                len => {
                    return Err(CnfViolation::TooLong {
                        nonterminal: name.to_owned(),
                        len,
                        production: production.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
