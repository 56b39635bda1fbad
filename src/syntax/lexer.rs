use std::{borrow::Cow, convert::TryFrom, iter::Peekable, str::CharIndices};

use crate::syntax::tokens::{Spanned, SpannedTok, Token};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

fn is_ignored(c: char) -> bool {
    !(c.is_ascii_whitespace()
        || c.is_ascii_digit()
        || c == 'x'
        || matches!(c, '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')'))
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Never fails: characters that can't start a token are skipped.
    pub fn tokenize(mut self) -> Vec<SpannedTok<'a>> {
        let mut tokens = vec![];
        while let Some((pos, char)) = self.next() {
            match char {
                c if c.is_ascii_digit() => tokens.push(self.num(pos)),
                'x' | '(' | ')' | '+' | '-' | '*' | '/' | '%' | '^' => {
                    if let Ok(elem) = Token::try_from(&self.source[pos..pos + 1]) {
                        tokens.push(Spanned {
                            elem,
                            span: pos..pos + 1,
                        })
                    }
                }
                c if c.is_ascii_whitespace() => (),
                c => log::trace!("ignoring {:?} at {}", c, pos),
            }
        }
        log::debug!("tokenized {} chars into {} tokens", self.source.len(), tokens.len());
        tokens
    }

    /// Digits up to the next separator. Ignored characters between digits do not end
    /// the number, so `1a2` reads as `12`.
    pub fn num(&mut self, start: usize) -> SpannedTok<'a> {
        let mut end = start + 1;
        let mut spliced: Option<String> = None;
        loop {
            while let Some((pos, c)) = self.next_if(|c| c.is_ascii_digit()) {
                if let Some(text) = spliced.as_mut() {
                    text.push(c);
                }
                end = pos + 1;
            }
            let mut skipped = false;
            while let Some((pos, c)) = self.next_if(is_ignored) {
                log::trace!("ignoring {:?} at {}", c, pos);
                skipped = true;
            }
            let resumes = self.peek().map_or(false, |&(_, c)| c.is_ascii_digit());
            if !(skipped && resumes) {
                break;
            }
            if spliced.is_none() {
                spliced = Some(self.source[start..end].to_owned());
            }
        }
        let text = match spliced {
            Some(text) => Cow::Owned(text),
            None => Cow::Borrowed(&self.source[start..end]),
        };
        Spanned {
            elem: Token::Num(text),
            span: start..end,
        }
    }

    pub fn next_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<(usize, char)> {
        if predicate(self.peek()?.1) {
            return self.next();
        }
        None
    }

    fn peek(&mut self) -> Option<&(usize, char)> {
        self.chars.peek()
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::texts;
    use pretty_assertions::assert_eq;

    fn lex(source: &str) -> Vec<String> {
        texts(&Lexer::new(source).tokenize())
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn splits_operators_and_operands() {
        assert_eq!(lex("12+x*3"), vec!["12", "+", "x", "*", "3"]);
        assert_eq!(lex("(1+2)%3^x"), vec!["(", "1", "+", "2", ")", "%", "3", "^", "x"]);
    }

    #[test]
    fn whitespace_separates_numbers() {
        assert_eq!(lex(" 12 34\t5\n"), vec!["12", "34", "5"]);
        assert_eq!(lex(""), Vec::<String>::new());
        assert_eq!(lex("   "), Vec::<String>::new());
    }

    #[test]
    fn only_ascii_whitespace_separates() {
        assert_eq!(lex("1\u{2003}2"), vec!["12"]);
        assert_eq!(lex("3\u{a0}+\u{2003}x"), vec!["3", "+", "x"]);
    }

    #[test]
    fn x_ends_a_number() {
        assert_eq!(lex("2x3"), vec!["2", "x", "3"]);
        assert_eq!(lex("xx"), vec!["x", "x"]);
    }

    #[test]
    fn unknown_characters_are_dropped() {
        assert_eq!(lex("y + z"), vec!["+"]);
        assert_eq!(lex("1.5"), vec!["15"]);
        assert_eq!(lex("1a2 + 3"), vec!["12", "+", "3"]);
        assert_eq!(lex("7a"), vec!["7"]);
        assert_eq!(lex("7a+1"), vec!["7", "+", "1"]);
    }

    #[test]
    fn spans_cover_the_source_text() {
        let tokens = Lexer::new("10 * x").tokenize();
        let spans: Vec<_> = tokens.iter().map(|t| t.span.clone()).collect();
        assert_eq!(spans, vec![0..2, 3..4, 5..6]);

        let tokens = Lexer::new("1,000").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, 0..5);
        assert_eq!(tokens[0].elem, Token::Num(Cow::Owned("1000".to_owned())));
    }

    #[test]
    fn contiguous_numbers_borrow_the_source() {
        let tokens = Lexer::new("123").tokenize();
        assert!(matches!(&tokens[0].elem, Token::Num(Cow::Borrowed("123"))));
    }
}
