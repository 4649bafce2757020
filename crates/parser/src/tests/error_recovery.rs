// Error Recovery Tests
//
// Tests for parser error handling and the spans attached to errors.

use crate::error::{describe, render_errors};
use crate::parser::parse_expression;

fn parse(input: &str) -> bool {
    parse_expression(input).is_ok()
}

// ==================== SYNTAX ERROR TESTS ====================

#[test]
fn test_unclosed_paren() {
    assert!(!parse("foo(1, 2"));
}

#[test]
fn test_unclosed_bracket() {
    assert!(!parse("[1, 2, 3"));
}

#[test]
fn test_mismatched_parens() {
    assert!(!parse("(1 + 2]"));
}

#[test]
fn test_missing_rhs() {
    assert!(!parse("1 +"));
}

#[test]
fn test_trailing_operand() {
    assert!(!parse("1 + 2 )"));
}

#[test]
fn test_empty_input() {
    assert!(!parse(""));
}

#[test]
fn test_whitespace_only_input() {
    assert!(!parse("   "));
}

// ==================== LEXICAL ERRORS ====================

#[test]
fn test_invalid_character_reported_with_span() {
    let errors = parse_expression("1 + $").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span(), 4..5);
    assert_eq!(describe(&errors[0]), "Unexpected character '$'");
}

#[test]
fn test_assignment_is_not_an_expression() {
    assert!(!parse("x = 3"));
}

// ==================== IMPLICIT MULTIPLICATION ====================

#[test]
fn test_implicit_multiplication_number_identifier() {
    let errors = parse_expression("2x").unwrap_err();
    assert_eq!(errors[0].span(), 0..2);
    assert!(describe(&errors[0]).contains("write '2 * x'"));
}

#[test]
fn test_implicit_multiplication_parens() {
    let errors = parse_expression("(1 + 2)(3)").unwrap_err();
    assert!(describe(&errors[0]).starts_with("Implicit multiplication"));
}

#[test]
fn test_call_is_not_implicit_multiplication() {
    assert!(parse("sin(2)"));
}

// ==================== SPANS ====================

#[test]
fn test_unexpected_token_span() {
    let errors = parse_expression("1 + * 2").unwrap_err();
    assert_eq!(errors[0].span(), 4..5);
    assert_eq!(describe(&errors[0]), "Unexpected token '*'");
}

#[test]
fn test_unexpected_end_of_input() {
    let errors = parse_expression("sqrt(").unwrap_err();
    assert!(!errors.is_empty());
}

#[test]
fn test_render_mentions_code_and_filename() {
    let errors = parse_expression("1 + * 2").unwrap_err();
    let rendered = render_errors("<expr>", "1 + * 2", &errors);
    assert!(rendered.contains("E001"));
    assert!(rendered.contains("<expr>"));
}

// ==================== NESTING LIMIT ====================

#[test]
fn test_deep_prefix_signs_rejected() {
    let source = format!("{}1", "-".repeat(1000));
    let errors = parse_expression(&source).unwrap_err();
    assert!(describe(&errors[0]).contains("nested too deeply"));
}

#[test]
fn test_deep_parens_rejected() {
    let source = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    let errors = parse_expression(&source).unwrap_err();
    assert!(describe(&errors[0]).contains("nested too deeply"));
}

#[test]
fn test_deep_power_chain_rejected() {
    let source = format!("2{}", "^2".repeat(500));
    assert!(parse_expression(&source).is_err());
}

#[test]
fn test_moderate_nesting_accepted() {
    assert!(parse(&format!("{}1{}", "(".repeat(32), ")".repeat(32))));
    assert!(parse(&format!("{}1", "-".repeat(32))));
}

#[test]
fn test_long_flat_expression_accepted() {
    // Many siblings, no depth: each binary operator resets the chain
    let source = vec!["-1"; 500].join(" + ");
    assert!(parse(&source));
}
