use std::{borrow::Cow, fmt};

pub use super::operators::BinOp;

/// A node of the expression tree. Leaves are numbers or the variable, every
/// operator node owns exactly two children.
#[derive(Debug, PartialEq, Clone)]
pub enum Node<'a> {
    Num(Cow<'a, str>),
    Var,
    Binary(BinOp, Box<Node<'a>>, Box<Node<'a>>),
}

impl<'a> Node<'a> {
    pub fn binary(op: BinOp, left: Node<'a>, right: Node<'a>) -> Self {
        Node::Binary(op, Box::new(left), Box::new(right))
    }

    /// The text of the node: the number's digits, `x`, or the operator symbol.
    pub fn value(&self) -> &str {
        match self {
            Node::Num(n) => n.as_ref(),
            Node::Var => "x",
            Node::Binary(op, _, _) => op.symbol(),
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Node::Var)
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Binary(..))
    }

    pub fn left(&self) -> Option<&Node<'a>> {
        match self {
            Node::Binary(_, left, _) => Some(&**left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&Node<'a>> {
        match self {
            Node::Binary(_, _, right) => Some(&**right),
            _ => None,
        }
    }

    /// Node values in pre-order.
    pub fn preorder(&self) -> Preorder<'_, 'a> {
        Preorder { stack: vec![self] }
    }
}

pub struct Preorder<'n, 'a> {
    stack: Vec<&'n Node<'a>>,
}

impl<'n, 'a> Iterator for Preorder<'n, 'a> {
    type Item = &'n str;
    fn next(&mut self) -> Option<&'n str> {
        let node = self.stack.pop()?;
        if let Node::Binary(_, left, right) = node {
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node.value())
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Binary(op, left, right) => write!(f, "({} {} {})", left, op, right),
            leaf => f.write_str(leaf.value()),
        }
    }
}
