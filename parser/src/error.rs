use lexer::error::LexerError;
use lexer::tokens::Token;
use lexer::Span;
use thiserror::Error;

/// An Error raised while reading a grammar. Line numbers are one-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed rule on line {line}: {reason}")]
    MalformedRule { line: u64, reason: String },
    #[error("Unexpected token `{token}` on {span}")]
    UnexpectedToken { token: String, span: Span },
    #[error(transparent)]
    Lexer(#[from] LexerError),
}

impl ParseError {
    pub fn malformed(span: Span, reason: String) -> ParseError {
        ParseError::MalformedRule {
            line: span.start_line + 1,
            reason,
        }
    }

    pub fn unexpected(t: &Token, span: Span) -> ParseError {
        ParseError::UnexpectedToken {
            token: t.to_string(),
            span,
        }
    }
}
