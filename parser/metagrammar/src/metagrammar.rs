use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Token};

pub struct MetaGrammar {
    pub rules: Punctuated<Rule, Token![;]>,
}

impl Parse for MetaGrammar {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(MetaGrammar {
            rules: Punctuated::parse_terminated(input)?,
        })
    }
}

// RULE: NAME ':' ALT ('|' ALT)*
pub struct Rule {
    pub name: Ident,
    pub alts: Punctuated<Alt, Token![|]>,
}

impl Parse for Rule {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![:]>()?;
        let alts = Punctuated::parse_separated_nonempty(input)?;
        Ok(Rule { name, alts })
    }
}

// ALT: ITEM+
pub struct Alt {
    pub items: Vec<Item>,
}

impl Parse for Alt {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut items = vec![];
        loop {
            let next = input.lookahead1();
            if next.peek(Ident) || next.peek(LitStr) {
                items.push(input.parse()?);
            } else if items.is_empty() {
                // no empty alternatives
                return Err(next.error());
            } else {
                return Ok(Alt { items });
            }
        }
    }
}

// ITEM: NAME | STRING
pub enum Item {
    Name(Ident),
    Str(String),
}

impl Parse for Item {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            let text: LitStr = input.parse()?;
            Ok(Item::Str(text.value()))
        } else {
            Ok(Item::Name(input.parse()?))
        }
    }
}
