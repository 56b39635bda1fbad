use crate::{
    errors::err::{Error, ErrorInfo, ParseResult},
    syntax::{
        operators::{priority, Operator},
        tokens::{texts, Delimiter, Spanned, SpannedTok, Token},
    },
};

/// Reorders infix tokens into postfix. Operators of equal priority pop each other,
/// so every operator, `^` included, groups to the left.
pub fn to_postfix<'a, I>(tokens: I) -> ParseResult<'a, Vec<SpannedTok<'a>>>
where
    I: IntoIterator<Item = SpannedTok<'a>>,
{
    let mut output = vec![];
    let mut stack: Vec<SpannedTok<'a>> = vec![];
    for tok in tokens {
        match tok.elem {
            Token::Num(_) | Token::Var => output.push(tok),
            Token::Delimiter(Delimiter::LParen) => stack.push(tok),
            Token::Delimiter(Delimiter::RParen) => loop {
                match stack.pop() {
                    Some(Spanned {
                        elem: Token::Delimiter(Delimiter::LParen),
                        ..
                    }) => break,
                    Some(op) => output.push(op),
                    None => {
                        return Err(ErrorInfo::malformed(
                            "unmatched closing parenthesis",
                            tok.span,
                        ))
                    }
                }
            },
            Token::Op(sym) => {
                let incoming = match Operator::lookup(sym) {
                    Some(op) => op,
                    None => return Err(ErrorInfo::new(Error::UnknownOperator(sym), tok.span)),
                };
                // `(` has priority 0 and stays put
                while stack
                    .last()
                    .map_or(false, |top| priority(top.elem.as_str()) >= incoming.prec)
                {
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(tok);
            }
        }
    }
    while let Some(tok) = stack.pop() {
        if let Token::Delimiter(_) = tok.elem {
            return Err(
                ErrorInfo::malformed("unclosed parenthesis", tok.span)
                    .expected("a closing parenthesis"),
            );
        }
        output.push(tok);
    }
    log::debug!("postfix: {}", texts(&output).join(" "));
    Ok(output)
}
