// Error handling for evaluation
//
// Error types for parsing, evaluation and the matrix routines. Plain
// arithmetic never errors: NaN and infinities propagate as values.

use std::fmt;

// Import Span and parse error types from the parser crate
pub use parser::ast::Span;
pub use parser::error::ParseError;

/// Evaluation error types
#[derive(Debug, Clone)]
pub enum MathError {
    /// Lexing or parsing the expression source failed
    Parse(Vec<ParseError>),

    /// Variable or function not found in scope, constants or builtins
    UndefinedSymbol { name: String, span: Option<Span> },

    /// Operand kinds do not fit the operation (e.g. matrix + number)
    TypeError {
        expected: String,
        found: String,
        context: String,
        span: Option<Span>,
    },

    /// Wrong number of arguments in a function call
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
        span: Option<Span>,
    },

    /// Operation restricted to 2x2 matrices received another shape
    UnsupportedShape {
        operation: String,
        rows: usize,
        cols: usize,
    },

    /// Inverse of a 2x2 matrix whose determinant is zero
    SingularMatrix,

    /// Failure while evaluating an `Expression`, wrapping the real cause
    InvalidExpression {
        expression: String,
        cause: Box<MathError>,
    },

    /// Malformed `name=value` binding
    InvalidBinding { binding: String, reason: String },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Parse(errors) => {
                let messages: Vec<String> = errors.iter().map(parser::error::describe).collect();
                write!(f, "Parse error: {}", messages.join("; "))
            }
            MathError::UndefinedSymbol { name, .. } => {
                write!(f, "Undefined symbol '{}'", name)
            }
            MathError::TypeError {
                expected,
                found,
                context,
                ..
            } => {
                write!(
                    f,
                    "Type error in {}: expected {}, found {}",
                    context, expected, found
                )
            }
            MathError::ArityMismatch {
                function,
                expected,
                found,
                ..
            } => {
                write!(
                    f,
                    "Function '{}' expects {} argument(s), found {}",
                    function, expected, found
                )
            }
            MathError::UnsupportedShape { operation, .. } => {
                write!(f, "{} only supported for 2x2 matrices", operation)
            }
            MathError::SingularMatrix => write!(f, "Matrix is singular"),
            MathError::InvalidExpression { expression, .. } => {
                write!(f, "Invalid expression: {}", expression)
            }
            MathError::InvalidBinding { binding, reason } => {
                write!(f, "Invalid binding '{}': {}", binding, reason)
            }
        }
    }
}

impl std::error::Error for MathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MathError::InvalidExpression { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl MathError {
    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            MathError::Parse(_) => 101,
            MathError::UndefinedSymbol { .. } => 102,
            MathError::TypeError { .. } => 103,
            MathError::ArityMismatch { .. } => 104,
            MathError::UnsupportedShape { .. } => 105,
            MathError::SingularMatrix => 106,
            // The wrapper reports whatever actually went wrong
            MathError::InvalidExpression { cause, .. } => cause.exit_code(),
            MathError::InvalidBinding { .. } => 108,
        }
    }

    /// Source span of the failing sub-expression, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            MathError::Parse(errors) => errors.first().map(|e| e.span()),
            MathError::UndefinedSymbol { span, .. }
            | MathError::TypeError { span, .. }
            | MathError::ArityMismatch { span, .. } => span.clone(),
            MathError::InvalidExpression { cause, .. } => cause.span(),
            MathError::UnsupportedShape { .. }
            | MathError::SingularMatrix
            | MathError::InvalidBinding { .. } => None,
        }
    }

    /// Innermost error, looking through `InvalidExpression` wrappers
    pub fn root_cause(&self) -> &MathError {
        match self {
            MathError::InvalidExpression { cause, .. } => cause.root_cause(),
            other => other,
        }
    }
}

/// Convenient Result type for evaluation
pub type MathResult<T> = Result<T, MathError>;
