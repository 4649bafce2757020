// Linear algebra functions (det, inv, transpose)
//
// All take a single matrix argument.

use crate::builtins::{check_arity, expect_matrix};
use crate::error::{MathResult, Span};
use crate::evaluator::Evaluator;
use crate::matrix;
use crate::value::Value;

pub const LINALG_FUNCTIONS: [&str; 4] = ["matrix", "det", "inv", "transpose"];

/// Trait for linear algebra function calls
pub trait LinalgFunctions {
    /// Call a linear algebra function; `None` when `name` is not one of them
    fn call_linalg_function(
        &self,
        name: &str,
        args: &[Value],
        span: &Span,
    ) -> Option<MathResult<Value>>;
}

impl LinalgFunctions for Evaluator<'_> {
    fn call_linalg_function(
        &self,
        name: &str,
        args: &[Value],
        span: &Span,
    ) -> Option<MathResult<Value>> {
        if !LINALG_FUNCTIONS.contains(&name) {
            return None;
        }

        let result = check_arity(name, args, 1, span)
            .and_then(|_| expect_matrix(name, &args[0], span))
            .and_then(|m| match name {
                "det" => Ok(Value::Number(matrix::det(m))),
                "inv" => matrix::inv(m).map(Value::Matrix),
                "transpose" => Ok(Value::Matrix(matrix::transpose(m))),
                _ => Ok(Value::Matrix(m.clone())),
            });
        Some(result)
    }
}
