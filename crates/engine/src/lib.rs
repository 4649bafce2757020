// Math library: scalar wrappers, a toy matrix algebra, an expression
// evaluator and placeholder symbolic operations.

pub mod algebra;
pub mod builtins;
pub mod calculus;
pub mod error;
pub mod error_report;
pub mod evaluator;
pub mod expression;
pub mod lite;
pub mod matrix;
pub mod operators;
pub mod scalar;
pub mod value;

// Re-export error types for public API
pub use error::{MathError, MathResult, Span};
pub use error_report::{render_math_error, report_math_error};

pub use algebra::{expand, factorize, simplify};
pub use calculus::{Derivative, Integral, derivative, integrate};
pub use evaluator::Evaluator;
pub use expression::{Expression, evaluate, parse};
pub use matrix::Matrix;
pub use value::{Scope, Value};

#[cfg(test)]
mod tests;
