use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// An Error raised while assembling a grammar.
pub enum GrammarError {
    #[error("productions must contain at least one symbol")]
    EmptyProduction,
}
