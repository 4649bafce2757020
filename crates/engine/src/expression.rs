//! Expression objects.
//!
//! An [`Expression`] keeps its source text exactly as given. Nothing is
//! checked until [`Expression::evaluate`], which parses the text into an
//! AST and walks it against the scope. Scope values are never spliced into
//! the text, so `x` and `xy` are distinct variables.

use crate::error::{MathError, MathResult};
use crate::evaluator::Evaluator;
use crate::value::{Scope, Value};
use parser::ast::Expr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    source: String,
}

impl Expression {
    /// Wraps `source` without validating it.
    pub fn parse(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parses the source into an AST.
    pub fn compile(&self) -> MathResult<Expr> {
        parser::parse_expression(&self.source).map_err(MathError::Parse)
    }

    /// Evaluates the expression. Any failure comes back as
    /// [`MathError::InvalidExpression`] with the original error as its cause.
    pub fn evaluate(&self, scope: &Scope) -> MathResult<Value> {
        tracing::debug!(expression = %self.source, vars = scope.len(), "evaluate");

        self.try_evaluate(scope).map_err(|cause| {
            tracing::debug!(expression = %self.source, error = %cause, "evaluation failed");
            MathError::InvalidExpression {
                expression: self.source.clone(),
                cause: Box::new(cause),
            }
        })
    }

    fn try_evaluate(&self, scope: &Scope) -> MathResult<Value> {
        let ast = self.compile()?;
        Evaluator::new(scope).evaluate(&ast)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for Expression {
    fn from(source: &str) -> Self {
        Expression::parse(source)
    }
}

impl From<String> for Expression {
    fn from(source: String) -> Self {
        Expression::parse(source)
    }
}

/// Wraps `source` in an [`Expression`].
pub fn parse(source: impl Into<String>) -> Expression {
    Expression::parse(source)
}

/// Parses and evaluates `source` in one step.
pub fn evaluate(source: &str, scope: &Scope) -> MathResult<Value> {
    Expression::parse(source).evaluate(scope)
}
