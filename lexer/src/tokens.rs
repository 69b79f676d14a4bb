use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    EndMarker,
    NewLine,
    // A bracketed nonterminal reference, stored without its brackets.
    Name(String),
    // Any other whitespace-delimited token, i.e. a terminal.
    Word(String),
    Define,
    Pipe,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::EndMarker => write!(f, "ENDMARKER"),
            Token::NewLine => write!(f, "NEWLINE"),
            Token::Name(v) => write!(f, "<{}>", v),
            Token::Word(v) => write!(f, "{}", v),
            Token::Define => write!(f, "::="),
            Token::Pipe => write!(f, "|"),
        }
    }
}
