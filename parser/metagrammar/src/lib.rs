//! The grammar literal macro.
//!
//! This package contains a procedural rust macro [`build_grammar!`] which
//! reads a context-free grammar written in a small pseudo-rust syntax and
//! expands to an expression that builds the equivalent `grammar::Grammar`.
//!
//! Mainly this is used by tests and benchmarks, where writing grammars out
//! symbol by symbol would bury what is being tested. Since the grammar is
//! parsed at compile time, a malformed literal (e.g. an empty alternative)
//! is a compile error rather than a test failure.
//!
//! [`build_grammar!`]: macro.build_grammar.html

extern crate proc_macro;
mod metagrammar;

use proc_macro::TokenStream;

use quote::quote;
use syn::parse_macro_input;

use crate::metagrammar::{Alt, Item, MetaGrammar};

fn build_symbol(item: Item) -> proc_macro2::TokenStream {
    match item {
        Item::Name(v) => {
            let name = v.to_string();
            quote! { ::grammar::Symbol::nonterminal(#name) }
        }
        Item::Str(v) => {
            quote! { ::grammar::Symbol::terminal(#v) }
        }
    }
}

fn build_production(alt: Alt) -> proc_macro2::TokenStream {
    let symbols: Vec<_> = alt.items.into_iter().map(build_symbol).collect();
    // Alternatives are never empty, the parser already rejected those.
    quote! {
        ::grammar::Production::new(vec![#(#symbols),*])
            .expect("grammar literal alternatives are never empty")
    }
}

/// Build a `grammar::Grammar` from a grammar literal.
///
/// Identifiers are nonterminals and string literals are terminals. Each rule
/// is a name, a colon, and `|` separated alternatives, terminated by `;`.
/// A name may be given several rules; its alternatives accumulate. The first
/// rule's name is the start symbol.
///
/// # Examples
///
/// ```
/// use metagrammar::build_grammar;
///
/// let grammar = build_grammar! {
///     Sum: Sum "+" Num | Num;
///     Num: "0" | "1";
/// };
///
/// assert_eq!(grammar.start(), Some("Sum"));
/// assert_eq!(grammar.to_string(), "<Sum> -> <Sum> + <Num> | <Num>\n<Num> -> 0 | 1\n");
/// ```
///
#[proc_macro]
pub fn build_grammar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as MetaGrammar);

    let pushes: Vec<_> = input
        .rules
        .into_iter()
        .flat_map(|rule| {
            let name = rule.name.to_string();
            rule.alts.into_iter().map(move |alt| {
                let production = build_production(alt);
                quote! { grammar.push(#name, #production); }
            })
        })
        .collect();

    let output = quote! {
        {
            let mut grammar = ::grammar::Grammar::new();
            #(#pushes)*
            grammar
        }
    };

    output.into()
}
