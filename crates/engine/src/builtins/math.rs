// Math library functions (sin, cos, sqrt, etc.) and constants
//
// Scalar functions take exactly one number. The arithmetic functions
// (add, subtract, ...) accept numbers and matrices like the operators do.

use crate::builtins::{check_arity, expect_number};
use crate::error::{MathResult, Span};
use crate::evaluator::Evaluator;
use crate::operators;
use crate::scalar;
use crate::value::Value;
use parser::ast::BinaryOp;

/// Named constants, looked up after the scope
pub const CONSTANTS: [(&str, f64); 2] = [("pi", scalar::PI), ("e", scalar::E)];

pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}

/// Scalar function with signature f64 -> f64
pub fn unary_function(name: &str) -> Option<fn(f64) -> f64> {
    let f: fn(f64) -> f64 = match name {
        // Roots and magnitude
        "sqrt" => scalar::sqrt,
        "abs" => scalar::abs,

        // Trigonometric
        "sin" => scalar::sin,
        "cos" => scalar::cos,
        "tan" => scalar::tan,
        "asin" => scalar::asin,
        "acos" => scalar::acos,
        "atan" => scalar::atan,

        // Logarithmic
        "log" => scalar::log,
        "ln" => scalar::ln,
        "log2" => scalar::log2,

        // Exponential
        "exp" => scalar::exp,
        "exp10" => scalar::exp10,
        "exp2" => scalar::exp2,

        _ => return None,
    };
    Some(f)
}

/// Arithmetic function with the same semantics as its operator
pub fn arithmetic_function(name: &str) -> Option<BinaryOp> {
    match name {
        "add" => Some(BinaryOp::Add),
        "subtract" => Some(BinaryOp::Sub),
        "multiply" => Some(BinaryOp::Mul),
        "divide" => Some(BinaryOp::Div),
        "pow" => Some(BinaryOp::Pow),
        _ => None,
    }
}

/// Trait for math library function calls
pub trait MathFunctions {
    /// Call a math function; `None` when `name` is not one of them
    fn call_math_function(&self, name: &str, args: &[Value], span: &Span)
    -> Option<MathResult<Value>>;
}

impl MathFunctions for Evaluator<'_> {
    fn call_math_function(
        &self,
        name: &str,
        args: &[Value],
        span: &Span,
    ) -> Option<MathResult<Value>> {
        if let Some(f) = unary_function(name) {
            let result = check_arity(name, args, 1, span)
                .and_then(|_| expect_number(name, &args[0], span))
                .map(|x| Value::Number(f(x)));
            return Some(result);
        }

        let op = arithmetic_function(name)?;
        let result = check_arity(name, args, 2, span)
            .and_then(|_| operators::apply_binary(op, args[0].clone(), args[1].clone(), span));
        Some(result)
    }
}
