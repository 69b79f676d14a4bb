//! Converts grammar files into Chomsky Normal Form.
//!
//! The input is bracket-delimited BNF, one rule per line:
//!
//! ```text
//! <S> ::= <A> <B> c
//! <A> ::= a
//! <B> ::= b
//! ```
//!
//! The converted grammar is written next to the input, in a file named after
//! it with a `cnf-` prefix, one `<name> -> sym sym | sym` line per
//! nonterminal.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{App, Arg};
use grammar::Grammar;
use log::info;
use normalize::{CnfViolation, NormalizeError};
use parser::ParseError;
use thiserror::Error;

/// Prefixed to the input file's name to name the output file.
pub const OUTPUT_PREFIX: &str = "cnf-";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("`{}` does not name a file", .0.display())]
    NotAFile(PathBuf),
    #[error("cannot read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error("converted grammar is not in Chomsky Normal Form: {0}")]
    NotCnf(#[from] CnfViolation),
}

/// Where to read the grammar from and where to write the result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Creates a config that writes next to `input`.
    pub fn new<P: Into<PathBuf>>(input: P) -> Result<Config, Error> {
        let input = input.into();
        match output_path(&input) {
            Some(output) => Ok(Config { input, output }),
            None => Err(Error::NotAFile(input)),
        }
    }

    /// Builds the config from command line arguments, the first of which is
    /// the program name.
    pub fn from_args<I, T>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = App::new("chomsky")
            .version(clap::crate_version!())
            .about("Converts a BNF grammar into Chomsky Normal Form")
            .arg(
                Arg::with_name("INPUT")
                    .help("grammar file to convert")
                    .index(1)
                    .required(true),
            )
            .get_matches_from_safe(args)?;
        let input = matches
            .value_of_os("INPUT")
            .ok_or_else(|| clap::Error::argument_not_found_auto("INPUT"))?;
        Config::new(input)
    }
}

/// The output file for `input`: a sibling whose name carries the
/// `cnf-` prefix. `None` if `input` has no file name.
pub fn output_path(input: &Path) -> Option<PathBuf> {
    let name = input.file_name()?;
    let mut prefixed = OsString::from(OUTPUT_PREFIX);
    prefixed.push(name);
    Some(input.with_file_name(prefixed))
}

/// Reads a grammar and converts it into Chomsky Normal Form.
pub fn convert<R: Read>(read: R) -> Result<Grammar, Error> {
    let grammar = parser::parse_reader(read)?;
    info!(
        "read {} nonterminals with {} productions",
        grammar.len(),
        grammar.production_count()
    );
    let grammar = normalize::to_cnf(grammar)?;
    normalize::check_cnf(&grammar)?;
    Ok(grammar)
}

/// Converts grammar text and renders the result.
pub fn convert_str(input: &str) -> Result<String, Error> {
    Ok(convert(input.as_bytes())?.to_string())
}

/// Converts the grammar file named by the config.
pub fn run(config: &Config) -> Result<(), Error> {
    let file = File::open(&config.input).map_err(|source| Error::Read {
        path: config.input.clone(),
        source,
    })?;
    let grammar = convert(file)?;
    fs::write(&config.output, grammar.to_string()).map_err(|source| {
        Error::Write {
            path: config.output.clone(),
            source,
        }
    })?;
    info!(
        "wrote {} nonterminals to {}",
        grammar.len(),
        config.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_prefixes_the_file_name() {
        assert_eq!(
            output_path(Path::new("grammar.bnf")),
            Some(PathBuf::from("cnf-grammar.bnf"))
        );
        assert_eq!(
            output_path(Path::new("dir/sub/grammar.bnf")),
            Some(PathBuf::from("dir/sub/cnf-grammar.bnf"))
        );
        assert_eq!(output_path(Path::new("/")), None);
        assert_eq!(output_path(Path::new("..")), None);
    }

    #[test]
    fn it_reads_the_input_argument() {
        let config = Config::from_args(vec!["chomsky", "g.bnf"]).unwrap();
        assert_eq!(config.input, PathBuf::from("g.bnf"));
        assert_eq!(config.output, PathBuf::from("cnf-g.bnf"));
    }

    #[test]
    fn it_requires_exactly_one_input() {
        match Config::from_args(vec!["chomsky"]) {
            Err(Error::Cli(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        match Config::from_args(vec!["chomsky", "a.bnf", "b.bnf"]) {
            Err(Error::Cli(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        match Config::from_args(vec!["chomsky", "--output", "x"]) {
            Err(Error::Cli(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn it_converts_text() {
        let output = convert_str("<S> ::= <S> <S> | s\n").unwrap();
        assert_eq!(
            output,
            "<$start> -> <S> <S> | s\n<S> -> <S> <S> | s\n"
        );
    }

    #[test]
    fn it_ignores_comment_lines_of_any_length() {
        let input = format!("# {}\n<S> ::= a\n", "x".repeat(9000));
        assert_eq!(convert_str(&input).unwrap(), "<$start> -> a\n<S> -> a\n");
    }

    #[test]
    fn it_reports_errors_by_kind() {
        match convert_str("") {
            Err(Error::Normalize(NormalizeError::EmptyGrammar)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        match convert_str("<S> ::= a\n<T> ::=\n") {
            Err(Error::Parse(ParseError::MalformedRule { line: 2, .. })) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
