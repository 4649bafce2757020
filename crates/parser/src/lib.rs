pub mod ast;
pub mod parser;
pub mod error;

pub use error::ParseError;
pub use parser::parse_expression;

#[cfg(test)]
mod tests;
