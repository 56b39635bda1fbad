use std::fmt::{self, Write};

use crate::syntax::ast::Node;

const INDENT: usize = 4;

/// Renders the tree rotated a quarter turn: the root sits in the first column,
/// right subtrees above their parent, left subtrees below.
pub fn render_sideways(root: &Node) -> String {
    let mut out = String::new();
    write_sideways(root, 0, &mut out).expect("writing to a String can't fail");
    out
}

pub fn write_sideways<W: Write>(node: &Node, level: usize, out: &mut W) -> fmt::Result {
    if let Some(right) = node.right() {
        write_sideways(right, level + 1, out)?;
    }
    writeln!(out, "{:width$}{}", "", node.value(), width = level * INDENT)?;
    if let Some(left) = node.left() {
        write_sideways(left, level + 1, out)?;
    }
    Ok(())
}
