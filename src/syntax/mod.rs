pub mod ast;

pub mod builder;

pub mod lexer;

pub mod operators;

pub mod shunting_yard;

pub mod tokens;

pub use ast::*;
pub use builder::*;
pub use lexer::*;
pub use shunting_yard::*;
pub use tokens::*;
