use crate::{
    errors::err::{Error, ErrorInfo, ParseResult},
    source_pos::join,
    syntax::{
        ast::Node,
        operators::Operator,
        tokens::{Span, Spanned, SpannedTok, Token},
    },
};

/// Builds an expression tree out of postfix tokens with an operand stack.
pub struct TreeBuilder<'a, I>
where
    I: Iterator<Item = SpannedTok<'a>>,
{
    tokens: I,
    stack: Vec<Spanned<Node<'a>>>,
}

impl<'a, I> TreeBuilder<'a, I>
where
    I: Iterator<Item = SpannedTok<'a>>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            stack: vec![],
        }
    }

    pub fn build(mut self) -> ParseResult<'a, Node<'a>> {
        while let Some(tok) = self.tokens.next() {
            self.push(tok)?;
        }
        let root = match self.stack.pop() {
            Some(root) => root,
            None => return Err(ErrorInfo::malformed("empty expression", 0..0)),
        };
        if let Some(extra) = self.stack.pop() {
            return Err(
                ErrorInfo::malformed("operand without an operator", extra.span)
                    .expected("an operator"),
            );
        }
        log::debug!("built tree {}", root.elem);
        Ok(root.elem)
    }

    fn push(&mut self, tok: SpannedTok<'a>) -> ParseResult<'a, ()> {
        let Spanned { elem, span } = tok;
        let node = match elem {
            Token::Num(n) => Spanned::new(Node::Num(n), span),
            Token::Var => Spanned::new(Node::Var, span),
            Token::Op(sym) => {
                let operator = match Operator::lookup(sym) {
                    Some(op) => op,
                    None => return Err(ErrorInfo::new(Error::UnknownOperator(sym), span)),
                };
                // first pop is the right operand
                let right = self.operand(&span)?;
                let left = self.operand(&span)?;
                Spanned::new(
                    Node::binary(operator.op, left.elem, right.elem),
                    join(&left.span, &right.span),
                )
            }
            Token::Delimiter(_) => {
                return Err(ErrorInfo::malformed("parenthesis in postfix input", span))
            }
        };
        self.stack.push(node);
        Ok(())
    }

    fn operand(&mut self, op_span: &Span) -> ParseResult<'a, Spanned<Node<'a>>> {
        self.stack.pop().ok_or_else(|| {
            ErrorInfo::malformed("operator is missing an operand", op_span.clone())
                .expected("an operand")
        })
    }
}
