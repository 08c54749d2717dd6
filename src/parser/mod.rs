pub mod ast;
pub mod definitions;
pub mod errors;
pub mod expressions;

pub use ast::*;
pub use errors::*;
pub use expressions::{Parser, MAX_NESTING_DEPTH};
