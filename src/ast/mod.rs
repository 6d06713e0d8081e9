//! Abstract syntax tree for Ember programs.
//!
//! Every node carries the token it originated from and renders a canonical
//! textual form used both for debugging and as the test oracle for the
//! parser's round-trip property.

mod expression;
mod identifier;
mod literals;
mod node;
mod program;
mod statement;

pub use expression::*;
pub use identifier::Identifier;
pub use literals::{BooleanLiteral, FloatLiteral, IntegerLiteral, StringLiteral};
pub use node::Node;
pub use program::Program;
pub use statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement};
