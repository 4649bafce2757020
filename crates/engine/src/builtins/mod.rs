// Built-in functions callable from expressions
//
// Each group is a trait implemented on the evaluator, so the evaluator can
// try the groups in turn when it meets a call.

pub mod linalg;
pub mod math;

use crate::error::{MathError, MathResult, Span};
use crate::matrix::Matrix;
use crate::value::Value;

/// Fails unless exactly `expected` arguments were passed to `function`
pub fn check_arity(function: &str, args: &[Value], expected: usize, span: &Span) -> MathResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(MathError::ArityMismatch {
            function: function.to_string(),
            expected,
            found: args.len(),
            span: Some(span.clone()),
        })
    }
}

pub fn expect_number(function: &str, value: &Value, span: &Span) -> MathResult<f64> {
    value.as_number().ok_or_else(|| MathError::TypeError {
        expected: "number".to_string(),
        found: value.type_name().to_string(),
        context: format!("call to '{}'", function),
        span: Some(span.clone()),
    })
}

pub fn expect_matrix<'v>(function: &str, value: &'v Value, span: &Span) -> MathResult<&'v Matrix> {
    value.as_matrix().ok_or_else(|| MathError::TypeError {
        expected: "matrix".to_string(),
        found: value.type_name().to_string(),
        context: format!("call to '{}'", function),
        span: Some(span.clone()),
    })
}
