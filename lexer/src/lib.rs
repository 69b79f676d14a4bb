//! Tokenizer for bracket-delimited BNF.
//!
//! Every rule sits on its own line:
//!
//! ```text
//! # comment lines start with a '#' token
//! <expr> ::= <expr> + <term> | <term>
//! <term> ::= x
//! ```
//!
//! Tokens are separated by whitespace. `<...>` tokens reference nonterminals,
//! `::=` and `|` are punctuation, and every other token is a terminal.

use std::io::Read;

pub mod buffer;
pub mod error;
pub mod tokens;

use buffer::TokenBuffer;
use error::LexerError;
use tokens::Token;

/// A `Span` describes the start and end points of a token. E.g. for presenting
/// errors to the user, it is helpful to know the location of a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
    pub start_line: u64,
    pub start_col: u64,
    pub end_line: u64,
    pub end_col: u64,
}

impl Span {
    /// Create a new span with the desired start and end points.
    pub fn new(
        start_line: u64,
        start_col: u64,
        end_line: u64,
        end_col: u64,
    ) -> Span {
        Span {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}

impl std::fmt::Display for Span {
    // Humans count lines and columns from one
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {} col {}", self.start_line + 1, self.start_col + 1)
    }
}

#[derive(Debug)]
pub struct ParsedToken(pub Token, pub Span);

impl ParsedToken {
    fn new(token: Token, span: Span) -> ParsedToken {
        ParsedToken(token, span)
    }
}

type LexerResult = Result<Option<ParsedToken>, LexerError>;
type TokenResult = Result<Option<Token>, LexerError>;

pub struct Lexer<R: Read> {
    buffer: TokenBuffer<R>,
    // Current line number
    line_num: u64,
    col_num: u64,
    // Line and column index of the current scanning token
    token_start: (u64, u64),
    // Whether a token has been produced on the current line yet. Comments
    // are only recognized as the first token of a line.
    line_has_token: bool,
    // True when there are no more tokens left to parse.
    done: bool,
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<ParsedToken, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        // consume input until we find a token
        loop {
            match self.next_token() {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) if self.done => return None,
                Ok(None) => (),
                Err(err) => {
                    // There is no sensible way to resume after an error
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<R: Read> Lexer<R> {
    /// Creates a new `Lexer`.
    ///
    /// A lexer reads input from a buffer and parses tokens one at a time.
    pub fn new(buffer: TokenBuffer<R>) -> Lexer<R> {
        Lexer {
            buffer,
            line_num: 0,
            col_num: 0,
            token_start: (0, 0), // start line, col of the current token
            line_has_token: false,
            done: false,
        }
    }

    /// Moves the buffer forward, incrementing the column counter
    fn scan_forward(&mut self) -> Result<Option<char>, LexerError> {
        let (line, col) = (self.line_num, self.col_num);
        match self.buffer.scan_forward() {
            Ok(Some(x)) if x == '\n' => {
                // Don't increment the column counter for new lines, we'll
                // reset the counter to 0 when we consume the new line.
                Ok(Some(x))
            }
            Ok(Some(x)) => {
                self.col_num += 1;
                Ok(Some(x))
            }
            Ok(None) => Ok(None),
            Err(err) => Err(LexerError::io(err, line, col)),
        }
    }

    /// Move the buffer backward, decrementing the column counter
    fn scan_back(&mut self) {
        match self.buffer.scan_back() {
            // Don't decrement the column when we scan back to a new line since
            // we didn't increment the column in scan_forward.
            Some('\n') | None => (),
            Some(_) => self.col_num -= 1,
        }
    }

    /// Helper function to wrap the token with the current line and column
    /// number.
    fn wrap_token(&self, token: Token) -> ParsedToken {
        let (start_line, start_col) = self.token_start;
        let (end_line, end_col) = (self.line_num, self.col_num);
        let span = Span::new(start_line, start_col, end_line, end_col);
        ParsedToken::new(token, span)
    }

    /// Gets the next token result. If the wrapped Option is None, that means
    /// we handled something that wasn't a token (e.g. whitespace or a
    /// comment). The wrapped option will be an EndMarker when the input
    /// buffer reaches EOF.
    fn next_token(&mut self) -> LexerResult {
        if self.done {
            return Ok(None);
        }
        self.token_start = (self.line_num, self.col_num);
        let c = match self.scan_forward()? {
            Some(c) => c,
            None => {
                let (line, col) = (self.line_num, self.col_num);
                let span = Span::new(line, col, line, col);
                self.done = true;
                return Ok(Some(ParsedToken::new(Token::EndMarker, span)));
            }
        };
        let token = match c {
            ' ' | '\t' | '\r' => self.handle_whitespace(),
            '\n' => self.handle_newline(),
            '#' if !self.line_has_token => self.handle_comment(),
            _ => self.handle_word(),
        }?;
        Ok(token.map(|token| self.wrap_token(token)))
    }

    /// Consumes whitespace
    fn handle_whitespace(&mut self) -> TokenResult {
        self.buffer.pop(); // consume the whitespace
        Ok(None)
    }

    /// Consumes newlines and increments the line counter and resets the
    /// column counter.
    fn handle_newline(&mut self) -> TokenResult {
        self.line_num += 1;
        self.col_num = 0;
        self.line_has_token = false;
        self.buffer.pop();
        Ok(Some(Token::NewLine))
    }

    /// Consumes comments. Characters are dropped as they are scanned, so a
    /// comment line may be longer than the buffer.
    fn handle_comment(&mut self) -> TokenResult {
        self.buffer.pop(); // consume the `#`
        loop {
            match self.scan_forward()? {
                Some('\n') => {
                    // leave the newline for handle_newline
                    self.scan_back();
                    return Ok(None);
                }
                Some(_) => {
                    self.buffer.pop();
                }
                None => return Ok(None),
            }
        }
    }

    /// Consumes a whitespace-delimited token and classifies it.
    fn handle_word(&mut self) -> TokenResult {
        let mut c = self.scan_forward()?;
        while match c {
            Some(' ') | Some('\t') | Some('\r') | Some('\n') | None => false,
            _ => true,
        } {
            c = self.scan_forward()?;
        }
        if c.is_some() {
            // The scanned char is not part of the token
            self.scan_back();
        }
        self.line_has_token = true;
        let v = self.buffer.pop();
        match &v[..] {
            "::=" => Ok(Some(Token::Define)),
            "|" => Ok(Some(Token::Pipe)),
            _ => match nonterminal_name(&v) {
                Some(name) => Ok(Some(Token::Name(name.to_owned()))),
                None if opens_nonterminal(&v) => {
                    let (line, col) = self.token_start;
                    Err(LexerError::unmatched_bracket(&v, line, col))
                }
                None => Ok(Some(Token::Word(v))),
            },
        }
    }
}

/// The name inside a well formed `<name>` token.
fn nonterminal_name(v: &str) -> Option<&str> {
    if v.len() < 3 || !v.starts_with('<') || !v.ends_with('>') {
        return None;
    }
    let name = &v[1..v.len() - 1];
    if name.contains(|c| c == '<' || c == '>') {
        return None;
    }
    Some(name)
}

/// Whether a token starts like a nonterminal reference. Operators such as
/// `<`, `<=` or `<<` do not, so they can still be used as terminals.
fn opens_nonterminal(v: &str) -> bool {
    let mut chars = v.chars();
    match (chars.next(), chars.next()) {
        (Some('<'), Some(c)) => c.is_alphanumeric() || c == '_' || c == '$',
        _ => false,
    }
}
