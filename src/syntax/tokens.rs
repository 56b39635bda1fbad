use std::{borrow::Cow, convert::TryFrom, fmt};

pub use crate::source_pos::{Span, Spanned};

pub type SpannedTok<'a> = Spanned<Token<'a>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    // Kept as text, the evaluator parses it. Owned only when the lexer had to splice
    // ignored characters out of the middle of a number.
    Num(Cow<'a, str>),

    Var,

    Op(&'a str),

    Delimiter(Delimiter),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Num(n) => n.as_ref(),
            Token::Var => "x",
            Token::Op(sym) => *sym,
            Token::Delimiter(Delimiter::LParen) => "(",
            Token::Delimiter(Delimiter::RParen) => ")",
        }
    }
}

impl<'a> TryFrom<&'a str> for Token<'a> {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(match value {
            "x" => Token::Var,
            "(" => Token::Delimiter(Delimiter::LParen),
            ")" => Token::Delimiter(Delimiter::RParen),
            "+" | "-" | "*" | "/" | "%" | "^" => Token::Op(value),
            n if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => {
                Token::Num(Cow::Borrowed(n))
            }
            _ => return Err(()),
        })
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}

/// Builds an unspanned token sequence from token texts, mostly for tests and
/// hand-written postfix input. Texts that are not tokens are dropped.
pub fn from_texts<'a>(texts: &[&'a str]) -> Vec<SpannedTok<'a>> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(i, text)| Token::try_from(*text).ok().map(|tok| Spanned::new(tok, i..i + 1)))
        .collect()
}

pub fn texts<'t>(tokens: &'t [SpannedTok<'_>]) -> Vec<&'t str> {
    tokens.iter().map(|tok| tok.elem.as_str()).collect()
}
