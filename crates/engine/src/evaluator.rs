// Tree-walking evaluator
//
// Evaluates a parsed expression against a scope. Identifiers resolve from
// the scope first, then from the named constants. Calls are dispatched to
// the builtin function groups in `builtins`.

use crate::builtins::linalg::LinalgFunctions;
use crate::builtins::math::{self, MathFunctions};
use crate::error::{MathError, MathResult, Span};
use crate::matrix::Matrix;
use crate::operators;
use crate::value::{Scope, Value};
use parser::ast::{Expr, ExprKind};

pub struct Evaluator<'s> {
    scope: &'s Scope,
}

impl<'s> Evaluator<'s> {
    pub fn new(scope: &'s Scope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &Scope {
        self.scope
    }

    pub fn evaluate(&self, expr: &Expr) -> MathResult<Value> {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),

            ExprKind::Identifier(name) => self.lookup(name, &expr.span),

            ExprKind::Unary { op, expr: operand } => {
                let value = self.evaluate(operand)?;
                Ok(operators::apply_unary(*op, value))
            }

            ExprKind::Binary { .. } => self.evaluate_binary_chain(expr),

            ExprKind::Call { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<MathResult<Vec<Value>>>()?;
                self.call(name, &values, &expr.span)
            }

            ExprKind::Array(items) => self.evaluate_array(items, &expr.span),
        }
    }

    /// Left-associative chains (`1 + 2 + 3 ...`) grow down the left side of
    /// the tree. Walk that spine in a loop so long sums do not recurse.
    fn evaluate_binary_chain(&self, expr: &Expr) -> MathResult<Value> {
        let mut spine = Vec::new();
        let mut leftmost = expr;
        while let ExprKind::Binary { op, lhs, rhs } = &leftmost.kind {
            spine.push((*op, rhs.as_ref(), &leftmost.span));
            leftmost = lhs;
        }

        let mut acc = self.evaluate(leftmost)?;
        for (op, rhs, span) in spine.into_iter().rev() {
            let rhs = self.evaluate(rhs)?;
            acc = operators::apply_binary(op, acc, rhs, span)?;
        }
        Ok(acc)
    }

    fn lookup(&self, name: &str, span: &Span) -> MathResult<Value> {
        if let Some(value) = self.scope.get(name) {
            return Ok(value.clone());
        }

        math::constant(name)
            .map(Value::Number)
            .ok_or_else(|| MathError::UndefinedSymbol {
                name: name.to_string(),
                span: Some(span.clone()),
            })
    }

    fn call(&self, name: &str, args: &[Value], span: &Span) -> MathResult<Value> {
        tracing::trace!(function = name, argc = args.len(), "call");

        if let Some(result) = self.call_math_function(name, args, span) {
            return result;
        }

        if let Some(result) = self.call_linalg_function(name, args, span) {
            return result;
        }

        Err(MathError::UndefinedSymbol {
            name: name.to_string(),
            span: Some(span.clone()),
        })
    }

    /// `[1, 2]` is a 1x2 row; `[[1, 2], [3, 4]]` stacks rows into a matrix.
    fn evaluate_array(&self, items: &[Expr], span: &Span) -> MathResult<Value> {
        let values = items
            .iter()
            .map(|item| self.evaluate(item))
            .collect::<MathResult<Vec<Value>>>()?;

        if values.is_empty() {
            return Ok(Value::Matrix(Matrix::default()));
        }

        if values.iter().all(|v| matches!(v, Value::Number(_))) {
            let row = values.iter().filter_map(Value::as_number).collect();
            return Ok(Value::Matrix(Matrix::new(vec![row])));
        }

        let mut rows = Vec::with_capacity(values.len());
        for value in &values {
            match value {
                Value::Matrix(m) if m.rows() <= 1 => {
                    rows.push(m.row(0).map(|r| r.to_vec()).unwrap_or_default());
                }
                other => {
                    return Err(MathError::TypeError {
                        expected: "a row of numbers".to_string(),
                        found: describe_row(other),
                        context: "matrix literal".to_string(),
                        span: Some(span.clone()),
                    });
                }
            }
        }

        Ok(Value::Matrix(Matrix::new(rows)))
    }
}

fn describe_row(value: &Value) -> String {
    match value {
        Value::Number(_) => "a number mixed with rows".to_string(),
        Value::Matrix(m) => format!("a {}x{} matrix", m.rows(), m.cols()),
    }
}
