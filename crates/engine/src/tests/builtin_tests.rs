// Built-in Function Dispatch Tests
//
// Exercises the builtin traits directly on an evaluator.

use crate::builtins::linalg::{LINALG_FUNCTIONS, LinalgFunctions};
use crate::builtins::math::{self, MathFunctions};
use crate::error::MathError;
use crate::evaluator::Evaluator;
use crate::matrix::Matrix;
use crate::value::{Scope, Value};

fn two_by_two() -> Value {
    Value::Matrix(Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]))
}

#[test]
fn test_constant_lookup() {
    assert_eq!(math::constant("pi"), Some(std::f64::consts::PI));
    assert_eq!(math::constant("e"), Some(std::f64::consts::E));
    assert_eq!(math::constant("tau"), None);
}

#[test]
fn test_unary_function_table() {
    for name in [
        "sqrt", "abs", "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "log2", "exp",
        "exp10", "exp2",
    ] {
        assert!(math::unary_function(name).is_some(), "{} missing", name);
    }
    assert!(math::unary_function("det").is_none());
}

#[test]
fn test_math_function_not_found_returns_none() {
    let scope = Scope::new();
    let evaluator = Evaluator::new(&scope);
    assert!(evaluator.call_math_function("det", &[two_by_two()], &(0..1)).is_none());
}

#[test]
fn test_linalg_function_not_found_returns_none() {
    let scope = Scope::new();
    let evaluator = Evaluator::new(&scope);
    assert!(evaluator.call_linalg_function("sqrt", &[Value::Number(4.0)], &(0..1)).is_none());
}

#[test]
fn test_linalg_functions_cover_table() {
    let scope = Scope::new();
    let evaluator = Evaluator::new(&scope);
    for name in LINALG_FUNCTIONS {
        let result = evaluator.call_linalg_function(name, &[two_by_two()], &(0..1));
        assert!(matches!(result, Some(Ok(_))), "{} failed: {:?}", name, result);
    }
}

#[test]
fn test_scalar_function_rejects_matrix() {
    let scope = Scope::new();
    let evaluator = Evaluator::new(&scope);
    let result = evaluator.call_math_function("sqrt", &[two_by_two()], &(3..9));
    match result {
        Some(Err(MathError::TypeError { expected, found, span, .. })) => {
            assert_eq!(expected, "number");
            assert_eq!(found, "matrix");
            assert_eq!(span, Some(3..9));
        }
        other => panic!("Expected type error, got {:?}", other),
    }
}

#[test]
fn test_linalg_function_rejects_number() {
    let scope = Scope::new();
    let evaluator = Evaluator::new(&scope);
    let result = evaluator.call_linalg_function("det", &[Value::Number(1.0)], &(0..1));
    assert!(matches!(result, Some(Err(MathError::TypeError { .. }))));
}

#[test]
fn test_arity_checked() {
    let scope = Scope::new();
    let evaluator = Evaluator::new(&scope);

    let result = evaluator.call_math_function("pow", &[Value::Number(2.0)], &(0..6));
    match result {
        Some(Err(MathError::ArityMismatch { function, expected, found, .. })) => {
            assert_eq!(function, "pow");
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("Expected arity mismatch, got {:?}", other),
    }

    let result = evaluator.call_linalg_function("det", &[], &(0..5));
    assert!(matches!(result, Some(Err(MathError::ArityMismatch { .. }))));
}
