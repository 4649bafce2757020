//! Minimal calculator surface.
//!
//! Unlike [`crate::Expression::evaluate`], `evaluate` here never returns an
//! error: failures are turned into an `Error: ...` string. It also accepts
//! the `×` and `÷` glyphs.

use crate::error::MathError;
use crate::evaluator::Evaluator;
use crate::value::Scope;

pub const SOLVE_PLACEHOLDER: &str = "Equation solving not implemented yet";
pub const FACTOR_PLACEHOLDER: &str = "Factorization not implemented yet";

/// Rewrites calculator glyphs into operators the parser knows.
pub fn normalize(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/")
}

pub fn evaluate(expr: &str) -> String {
    let normalized = normalize(expr);
    let scope = Scope::new();

    let result = parser::parse_expression(&normalized)
        .map_err(MathError::Parse)
        .and_then(|ast| Evaluator::new(&scope).evaluate(&ast));

    match result {
        Ok(value) => value.to_string(),
        Err(e) => {
            tracing::debug!(expression = expr, error = %e, "lite evaluation failed");
            format!("Error: {}", e)
        }
    }
}

pub fn solve(_equation: &str) -> String {
    SOLVE_PLACEHOLDER.to_string()
}

pub fn simplify(expr: &str) -> String {
    expr.to_string()
}

pub fn factor(_expr: &str) -> String {
    FACTOR_PLACEHOLDER.to_string()
}
