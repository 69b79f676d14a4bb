use thiserror::Error;

/// An Error raised while normalizing a grammar. None of these can be
/// recovered from: the transformation is a pure function of its input.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum NormalizeError {
    #[error("the grammar has no nonterminals")]
    EmptyGrammar,
    #[error("<{nonterminal}> only reaches unit productions and derives no terminal string")]
    UnresolvableGrammar { nonterminal: String },
    #[error("generated nonterminal <{name}> is already defined")]
    FreshNameCollision { name: String },
}
