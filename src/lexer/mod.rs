pub mod errors;
pub mod scanner;
pub mod tokens;

pub use errors::*;
pub use scanner::*;
pub use tokens::*;
