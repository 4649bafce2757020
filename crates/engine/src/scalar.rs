//! Scalar wrappers over the `f64` standard library functions.
//!
//! No domain checks are performed: `divide(1.0, 0.0)` is infinity and
//! `ln(-1.0)` is NaN, exactly as the underlying methods produce.

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;

// Basic operations

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

pub fn pow(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub fn sqrt(a: f64) -> f64 {
    a.sqrt()
}

pub fn abs(a: f64) -> f64 {
    a.abs()
}

// Trigonometric functions (radians)

pub fn sin(a: f64) -> f64 {
    a.sin()
}

pub fn cos(a: f64) -> f64 {
    a.cos()
}

pub fn tan(a: f64) -> f64 {
    a.tan()
}

pub fn asin(a: f64) -> f64 {
    a.asin()
}

pub fn acos(a: f64) -> f64 {
    a.acos()
}

pub fn atan(a: f64) -> f64 {
    a.atan()
}

// Logarithmic functions

/// Base-10 logarithm.
pub fn log(a: f64) -> f64 {
    a.log10()
}

/// Natural logarithm.
pub fn ln(a: f64) -> f64 {
    a.ln()
}

pub fn log2(a: f64) -> f64 {
    a.log2()
}

// Exponential functions

pub fn exp(a: f64) -> f64 {
    a.exp()
}

/// `10^a`
pub fn exp10(a: f64) -> f64 {
    10f64.powf(a)
}

/// `2^a`
pub fn exp2(a: f64) -> f64 {
    2f64.powf(a)
}
