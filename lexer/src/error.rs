use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
/// An Error raised by the lexer. Line and column are stored zero-based,
/// like `Span`, and displayed one-based.
pub enum LexerError {
    #[error("Read error on line {} col {}: {}", .line + 1, .col + 1, .source)]
    Io {
        source: io::Error,
        line: u64,
        col: u64,
    },
    #[error("Unmatched bracket in `{}` on line {} col {}", .token, .line + 1, .col + 1)]
    UnmatchedBracket { token: String, line: u64, col: u64 },
}

impl LexerError {
    pub fn io(source: io::Error, line: u64, col: u64) -> LexerError {
        LexerError::Io { source, line, col }
    }

    pub fn unmatched_bracket(token: &str, line: u64, col: u64) -> LexerError {
        LexerError::UnmatchedBracket {
            token: token.into(),
            line,
            col,
        }
    }

    /// The line the error was found on.
    pub fn line(&self) -> u64 {
        match self {
            LexerError::Io { line, .. } => *line,
            LexerError::UnmatchedBracket { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_positions_one_based() {
        let err = LexerError::unmatched_bracket("<A", 0, 4);
        assert_eq!(err.to_string(), "Unmatched bracket in `<A` on line 1 col 5");
        assert_eq!(err.line(), 0);

        let source = io::Error::new(io::ErrorKind::InvalidData, "bad input");
        let err = LexerError::io(source, 2, 0);
        assert_eq!(err.to_string(), "Read error on line 3 col 1: bad input");
    }
}
