// Arithmetic operators
//
// Applies parsed binary and unary operators to runtime values. Number
// operands go through the scalar wrappers; matrix operands through the
// matrix module.

use crate::error::{MathError, MathResult, Span};
use crate::matrix;
use crate::scalar;
use crate::value::Value;
use parser::ast::{BinaryOp, UnaryOp};

pub fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value, span: &Span) -> MathResult<Value> {
    match (op, lhs, rhs) {
        (op, Value::Number(a), Value::Number(b)) => Ok(Value::Number(scalar_binary(op, a, b))),

        (BinaryOp::Add, Value::Matrix(a), Value::Matrix(b)) => Ok(matrix::add(&a, &b).into()),
        (BinaryOp::Sub, Value::Matrix(a), Value::Matrix(b)) => {
            Ok(matrix::subtract(&a, &b).into())
        }
        (BinaryOp::Mul, Value::Matrix(a), Value::Matrix(b)) => {
            Ok(matrix::multiply(&a, &b).into())
        }

        // Scalar multiple, either side
        (BinaryOp::Mul, Value::Matrix(m), Value::Number(k))
        | (BinaryOp::Mul, Value::Number(k), Value::Matrix(m)) => Ok(matrix::scale(&m, k).into()),
        (BinaryOp::Div, Value::Matrix(m), Value::Number(k)) => {
            Ok(matrix::scale(&m, 1.0 / k).into())
        }

        (op, lhs, rhs) => Err(MathError::TypeError {
            expected: format!("operands supported by '{}'", op),
            found: format!("{} {} {}", lhs.type_name(), op, rhs.type_name()),
            context: "binary operation".to_string(),
            span: Some(span.clone()),
        }),
    }
}

fn scalar_binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => scalar::add(a, b),
        BinaryOp::Sub => scalar::subtract(a, b),
        BinaryOp::Mul => scalar::multiply(a, b),
        BinaryOp::Div => scalar::divide(a, b),
        BinaryOp::Mod => a % b,
        BinaryOp::Pow => scalar::pow(a, b),
    }
}

pub fn apply_unary(op: UnaryOp, value: Value) -> Value {
    match (op, value) {
        (UnaryOp::Plus, value) => value,
        (UnaryOp::Negate, Value::Number(n)) => Value::Number(-n),
        (UnaryOp::Negate, Value::Matrix(m)) => Value::Matrix(matrix::scale(&m, -1.0)),
    }
}
