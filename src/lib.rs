//! Parses integer expressions over a single variable `x` into a binary tree,
//! evaluates it and normalizes `x * A` into `A * x`.
//!
//! The pipeline is lexer → shunting yard → tree builder, see [`parse`].

pub mod errors;
pub mod source_pos;
pub mod syntax;
pub mod tree;

pub use errors::err::{Error, ErrorInfo, ParseResult};
pub use syntax::{Lexer, Node, TreeBuilder};

/// Tokenizes `source`, converts it to postfix and builds its tree.
pub fn parse(source: &str) -> ParseResult<'_, Node<'_>> {
    let tokens = Lexer::new(source).tokenize();
    let postfix = syntax::to_postfix(tokens)?;
    TreeBuilder::new(postfix.into_iter()).build()
}
