// Expression Evaluation Tests
//
// Parsing is lazy; evaluation walks the AST with scope lookups.

use crate::error::MathError;
use crate::expression::{self, Expression};
use crate::matrix::Matrix;
use crate::value::{Scope, Value};

fn eval(source: &str) -> Value {
    expression::evaluate(source, &Scope::new())
        .unwrap_or_else(|e| panic!("{} failed: {:?}", source, e))
}

fn eval_number(source: &str) -> f64 {
    eval(source)
        .as_number()
        .unwrap_or_else(|| panic!("{} did not produce a number", source))
}

fn eval_with(source: &str, scope: &Scope) -> Value {
    Expression::parse(source)
        .evaluate(scope)
        .unwrap_or_else(|e| panic!("{} failed: {:?}", source, e))
}

// ==================== EXPRESSION OBJECT ====================

#[test]
fn test_parse_keeps_source_verbatim() {
    let expr = Expression::parse("  2 *   x ");
    assert_eq!(expr.source(), "  2 *   x ");
    assert_eq!(expr.to_string(), "  2 *   x ");
}

#[test]
fn test_parse_never_fails() {
    // Garbage is only detected on evaluation
    let expr = expression::parse("2 +* ) (");
    assert!(expr.evaluate(&Scope::new()).is_err());
}

#[test]
fn test_compile_gives_ast() {
    let ast = Expression::parse("1 + 2").compile().unwrap();
    assert_eq!(ast.to_string(), "(1 + 2)");
}

// ==================== ARITHMETIC ====================

#[test]
fn test_precedence() {
    assert_eq!(eval_number("1 + 2 * 3"), 7.0);
    assert_eq!(eval_number("(1 + 2) * 3"), 9.0);
    assert_eq!(eval_number("10 - 4 - 3"), 3.0);
    assert_eq!(eval_number("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(eval_number("-2 ^ 2"), -4.0);
    assert_eq!(eval_number("2 ** 10"), 1024.0);
}

#[test]
fn test_modulo() {
    assert_eq!(eval_number("7 % 3"), 1.0);
    assert_eq!(eval_number("-7 % 3"), -1.0);
}

#[test]
fn test_division_by_zero_is_infinity() {
    assert_eq!(eval_number("1 / 0"), f64::INFINITY);
    assert!(eval_number("0 / 0").is_nan());
}

#[test]
fn test_unary_plus_and_minus() {
    assert_eq!(eval_number("+5"), 5.0);
    assert_eq!(eval_number("--5"), 5.0);
    assert_eq!(eval_number("3 - -2"), 5.0);
}

// ==================== CONSTANTS AND SCOPE ====================

#[test]
fn test_constants() {
    assert_eq!(eval_number("pi"), std::f64::consts::PI);
    assert_eq!(eval_number("e"), std::f64::consts::E);
}

#[test]
fn test_scope_variables() {
    let scope = Scope::new().with("x", 3.0).with("y", 4.0);
    assert_eq!(eval_with("sqrt(x^2 + y^2)", &scope), Value::Number(5.0));
}

#[test]
fn test_scope_shadows_constants() {
    let scope = Scope::new().with("pi", 3.0);
    assert_eq!(eval_with("pi * 2", &scope), Value::Number(6.0));
}

#[test]
fn test_no_substring_collisions() {
    // Textual substitution would turn "xx" into "22" here
    let scope = Scope::new().with("x", 2.0).with("xx", 10.0);
    assert_eq!(eval_with("xx + x", &scope), Value::Number(12.0));
}

#[test]
fn test_scope_from_iterator() {
    let scope: Scope = [("a", 1.0), ("b", 2.0)].into_iter().collect();
    assert_eq!(scope.len(), 2);
    assert_eq!(eval_with("a + b", &scope), Value::Number(3.0));
}

#[test]
fn test_matrix_in_scope() {
    let scope = Scope::new().with("m", Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
    assert_eq!(eval_with("det(m)", &scope), Value::Number(-2.0));
}

// ==================== FUNCTIONS ====================

#[test]
fn test_scalar_functions() {
    assert_eq!(eval_number("sqrt(16)"), 4.0);
    assert_eq!(eval_number("abs(-3)"), 3.0);
    assert_eq!(eval_number("log(100)"), 2.0);
    assert_eq!(eval_number("ln(1)"), 0.0);
    assert_eq!(eval_number("log2(32)"), 5.0);
    assert_eq!(eval_number("exp(0)"), 1.0);
    assert_eq!(eval_number("exp10(3)"), 1000.0);
    assert_eq!(eval_number("exp2(4)"), 16.0);
    assert_eq!(eval_number("sin(0)"), 0.0);
    assert_eq!(eval_number("cos(0)"), 1.0);
    assert_eq!(eval_number("atan(1)"), 1f64.atan());
}

#[test]
fn test_arithmetic_functions() {
    assert_eq!(eval_number("add(2, 3)"), 5.0);
    assert_eq!(eval_number("subtract(2, 3)"), -1.0);
    assert_eq!(eval_number("multiply(2, 3)"), 6.0);
    assert_eq!(eval_number("divide(3, 2)"), 1.5);
    assert_eq!(eval_number("pow(2, 8)"), 256.0);
}

#[test]
fn test_nested_calls() {
    assert_eq!(eval_number("sqrt(abs(-16)) + pow(2, sqrt(9))"), 12.0);
}

// ==================== MATRICES ====================

#[test]
fn test_matrix_literal() {
    let value = eval("[[1, 2], [3, 4]]");
    assert_eq!(
        value,
        Value::Matrix(Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]))
    );
}

#[test]
fn test_row_literal() {
    assert_eq!(eval("[1, 2, 3]").to_string(), "[[1,2,3]]");
}

#[test]
fn test_empty_literal() {
    assert_eq!(eval("[]").to_string(), "[]");
}

#[test]
fn test_matrix_arithmetic() {
    assert_eq!(eval("[[1, 2], [3, 4]] + [[1, 1], [1, 1]]").to_string(), "[[2,3],[4,5]]");
    assert_eq!(eval("[[1, 2], [3, 4]] - [[1, 1], [1, 1]]").to_string(), "[[0,1],[2,3]]");
    assert_eq!(eval("[[1, 2], [3, 4]] * [[5, 6], [7, 8]]").to_string(), "[[19,22],[43,50]]");
    assert_eq!(eval("2 * [[1, 2], [3, 4]]").to_string(), "[[2,4],[6,8]]");
    assert_eq!(eval("[[1, 2], [3, 4]] * 2").to_string(), "[[2,4],[6,8]]");
    assert_eq!(eval("[[2, 4]] / 2").to_string(), "[[1,2]]");
    assert_eq!(eval("-[[1, -2]]").to_string(), "[[-1,2]]");
}

#[test]
fn test_matrix_functions() {
    assert_eq!(eval_number("det([[1, 2], [3, 4]])"), -2.0);
    assert_eq!(eval("transpose([[1, 2, 3]])").to_string(), "[[1],[2],[3]]");
    assert_eq!(eval("inv([[2, 0], [0, 4]])").to_string(), "[[0.5,0],[0,0.25]]");
    assert_eq!(eval("matrix([[1, 2]])").to_string(), "[[1,2]]");
    assert_eq!(eval("add([[1]], [[2]])").to_string(), "[[3]]");
}

#[test]
fn test_inverse_failures_propagate() {
    let err = expression::evaluate("inv([[1, 2], [2, 4]])", &Scope::new()).unwrap_err();
    assert!(matches!(err.root_cause(), MathError::SingularMatrix));

    let err = expression::evaluate("inv([[1, 2, 3]])", &Scope::new()).unwrap_err();
    assert!(matches!(err.root_cause(), MathError::UnsupportedShape { .. }));
}

#[test]
fn test_exponent_and_leading_dot_numbers() {
    assert_eq!(eval_number("1e3"), 1000.0);
    assert_eq!(eval_number("2.5E-1 * 4"), 1.0);
    assert_eq!(eval_number(".5 + .25"), 0.75);
}

#[test]
fn test_long_sum_evaluates() {
    let source = vec!["1"; 5000].join(" + ");
    assert_eq!(eval_number(&source), 5000.0);
}

#[test]
fn test_left_chain_keeps_order() {
    assert_eq!(eval_number("10 - 3 - 2 - 1"), 4.0);
    assert_eq!(eval_number("64 / 4 / 2 * 3"), 24.0);
}

#[test]
fn test_deep_nesting_is_parse_error() {
    let source = format!("{}1", "-".repeat(1000));
    let err = expression::evaluate(&source, &Scope::new()).unwrap_err();
    assert!(matches!(err.root_cause(), MathError::Parse(_)));
    assert_eq!(err.exit_code(), 101);
}
