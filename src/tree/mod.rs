//! Passes over a built expression tree.

pub mod eval;
pub mod printer;
pub mod rewrite;
