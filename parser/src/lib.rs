//! Reads bracket-delimited BNF into a [`Grammar`].
//!
//! ```
//! let grammar = parser::parse_str("<S> ::= <A> <B> c\n<A> ::= a\n<B> ::= b\n").unwrap();
//! assert_eq!(grammar.start(), Some("S"));
//! assert_eq!(grammar.len(), 3);
//! ```
//!
//! [`Grammar`]: ../grammar/struct.Grammar.html

mod error;

use std::io::Read;
use std::mem;

use grammar::{Grammar, Production, Symbol};
use lexer::buffer::TokenBuffer;
use lexer::error::LexerError;
use lexer::tokens::Token;
use lexer::{Lexer, ParsedToken, Span};
use log::debug;

pub use crate::error::ParseError;

enum State {
    // Waiting for the nonterminal that opens a rule
    LineStart,
    // Seen the rule's name, expecting `::=`
    Head(String),
    // Reading alternatives
    Body {
        name: String,
        alts: Vec<Production>,
        symbols: Vec<Symbol>,
    },
}

pub struct Parser<R: Read> {
    lexer: Lexer<R>,
}

impl<R: Read> Parser<R> {
    pub fn new(lexer: Lexer<R>) -> Parser<R> {
        Parser { lexer }
    }

    /// Parses every rule in the input. A nonterminal declared on several
    /// lines collects the alternatives of all of them, and the first
    /// declared nonterminal becomes the start symbol.
    pub fn parse(mut self) -> Result<Grammar, ParseError> {
        let mut grammar = Grammar::new();
        let mut state = State::LineStart;

        while let Some(token) = self.lexer.next() {
            let ParsedToken(token, span) = token?;
            state = match (state, token) {
                (State::LineStart, Token::NewLine) => State::LineStart,
                (State::LineStart, Token::EndMarker) => State::LineStart,
                (State::LineStart, Token::Name(name)) => State::Head(name),
                (State::LineStart, t) => {
                    return Err(ParseError::malformed(
                        span,
                        format!("expected a nonterminal, found `{}`", t),
                    ));
                }
                (State::Head(name), Token::Define) => State::Body {
                    name,
                    alts: vec![],
                    symbols: vec![],
                },
                (State::Head(name), _) => {
                    return Err(ParseError::malformed(
                        span,
                        format!("expected `::=` after <{}>", name),
                    ));
                }
                (State::Body { name, alts, mut symbols }, Token::Name(n)) => {
                    symbols.push(Symbol::Nonterminal(n));
                    State::Body { name, alts, symbols }
                }
                (State::Body { name, alts, mut symbols }, Token::Word(w)) => {
                    symbols.push(Symbol::Terminal(w));
                    State::Body { name, alts, symbols }
                }
                (State::Body { name, mut alts, mut symbols }, Token::Pipe) => {
                    alts.push(close_alternative(&name, &mut symbols, span)?);
                    State::Body { name, alts, symbols }
                }
                (State::Body { .. }, t @ Token::Define) => {
                    return Err(ParseError::unexpected(&t, span));
                }
                (
                    State::Body {
                        name,
                        mut alts,
                        mut symbols,
                    },
                    Token::NewLine,
                )
                | (
                    State::Body {
                        name,
                        mut alts,
                        mut symbols,
                    },
                    Token::EndMarker,
                ) => {
                    alts.push(close_alternative(&name, &mut symbols, span)?);
                    if grammar.contains(&name) {
                        debug!("merging repeated declaration of <{}>", name);
                    }
                    grammar.extend_rule(name, alts);
                    State::LineStart
                }
            };
        }

        Ok(grammar)
    }
}

/// Turns the symbols read since the last `|` into a production.
fn close_alternative(
    name: &str,
    symbols: &mut Vec<Symbol>,
    span: Span,
) -> Result<Production, ParseError> {
    Production::new(mem::replace(symbols, vec![])).map_err(|_| {
        ParseError::malformed(
            span,
            format!("empty alternative in the rule for <{}>", name),
        )
    })
}

/// Parses a grammar from any reader.
pub fn parse_reader<R: Read>(read: R) -> Result<Grammar, ParseError> {
    let buffer =
        TokenBuffer::new(read).map_err(|err| LexerError::io(err, 0, 0))?;
    Parser::new(Lexer::new(buffer)).parse()
}

/// Parses a grammar held in memory.
pub fn parse_str(input: &str) -> Result<Grammar, ParseError> {
    parse_reader(input.as_bytes())
}
