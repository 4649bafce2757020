//! Symbolic rewrites. None are implemented; each returns its input.

pub fn simplify<T>(expr: T) -> T {
    expr
}

pub fn expand<T>(expr: T) -> T {
    expr
}

pub fn factorize<T>(expr: T) -> T {
    expr
}
