use std::mem;

use crate::syntax::ast::{BinOp, Node};

impl<'a> Node<'a> {
    /// Rewrites every `x * A` into `A * x`, children first. Only child links move,
    /// no node is allocated.
    pub fn normalize_products(&mut self) -> &mut Self {
        if let Node::Binary(op, left, right) = self {
            left.normalize_products();
            right.normalize_products();
            if *op == BinOp::Mul && left.is_var() {
                log::trace!("swapping operands of x * {}", right);
                mem::swap(left, right);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn no_var_on_the_left_of_a_product(node: &Node) -> bool {
        match node {
            Node::Binary(op, left, right) => {
                !(*op == BinOp::Mul && left.is_var())
                    && no_var_on_the_left_of_a_product(left)
                    && no_var_on_the_left_of_a_product(right)
            }
            _ => true,
        }
    }

    #[test]
    fn moves_the_variable_right() {
        let mut tree = parse("x * 3 + 5").unwrap();
        tree.normalize_products();
        assert_eq!(tree.to_string(), "((3 * x) + 5)");
    }

    #[test]
    fn fires_at_every_level() {
        let mut tree = parse("x * (x * (2 - x * 4))").unwrap();
        tree.normalize_products();
        assert_eq!(tree.to_string(), "(((2 - (4 * x)) * x) * x)");
        assert!(no_var_on_the_left_of_a_product(&tree));
    }

    #[test]
    fn only_looks_at_the_immediate_left_leaf() {
        let mut tree = parse("(x + 1) * 2").unwrap();
        tree.normalize_products();
        assert_eq!(tree.to_string(), "((x + 1) * 2)");

        let mut tree = parse("x - 2").unwrap();
        tree.normalize_products();
        assert_eq!(tree.to_string(), "(x - 2)");
    }

    #[test]
    fn x_times_x_stays_a_product_of_x() {
        let mut tree = parse("x * x").unwrap();
        tree.normalize_products();
        assert_eq!(tree.to_string(), "(x * x)");
    }

    #[test]
    fn preserves_value() {
        let original = parse("x * 3 + 5").unwrap();
        let mut rewritten = original.clone();
        rewritten.normalize_products();
        assert_eq!(original.eval(2).unwrap(), 11);
        assert_eq!(rewritten.eval(2).unwrap(), 11);
    }

    #[test]
    fn is_idempotent() {
        let mut once = parse("x * (x ^ 2 * x) % 7 - x * 1").unwrap();
        once.normalize_products();
        let mut twice = once.clone();
        twice.normalize_products();
        assert_eq!(once, twice);
    }
}
