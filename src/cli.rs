// Command-line surface
//
// Subcommands map one-to-one onto engine operations. Every failure carries
// the text it came from so it can be rendered with Ariadne.

use clap::{Parser, Subcommand};
use engine::{Expression, MathError, MathResult, Scope, Value};
use logos::Logos;
use lexer::token::Token;

/// Math expression calculator with a toy 2x2 matrix algebra.
#[derive(Parser, Debug)]
#[command(name = "mathkit", version, about)]
pub struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate an expression, e.g. `sqrt(x^2 + 1)` or `inv([[1,2],[3,4]])`
    Eval {
        #[arg(allow_hyphen_values = true)]
        expr: String,
        /// Variable binding; the value may itself be an expression
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    /// Evaluate with the lite calculator (accepts × and ÷, never fails)
    Lite {
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },
    /// Placeholder derivative of an expression
    Derivative {
        #[arg(allow_hyphen_values = true)]
        expr: String,
        /// Variable to differentiate with respect to
        #[arg(long)]
        wrt: String,
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    /// Placeholder integral of an expression
    Integrate {
        #[arg(allow_hyphen_values = true)]
        expr: String,
        /// Variable to integrate with respect to
        #[arg(long)]
        wrt: String,
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    /// Print the token stream of an expression
    Tokens {
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },
}

/// A failed command: the error plus the text and name to report it against.
#[derive(Debug)]
pub struct Failure {
    pub filename: String,
    pub source: String,
    pub error: MathError,
}

impl Failure {
    fn expr(source: &str, error: MathError) -> Self {
        Self {
            filename: "<expr>".to_string(),
            source: source.to_string(),
            error,
        }
    }

    /// Render to stderr and return the process exit code.
    pub fn report(&self) -> i32 {
        if let Err(io_err) = engine::report_math_error(&self.filename, &self.source, &self.error) {
            tracing::error!(error = %io_err, "failed to write error report");
            eprintln!("{}", self.error);
        }
        self.error.exit_code()
    }
}

pub fn run(command: Command) -> Result<(), Failure> {
    match command {
        Command::Eval { expr, vars } => {
            let scope = parse_bindings(&vars)?;
            let value = Expression::parse(expr.as_str())
                .evaluate(&scope)
                .map_err(|e| Failure::expr(&expr, e))?;
            println!("{}", value);
        }
        Command::Lite { expr } => {
            println!("{}", engine::lite::evaluate(&expr));
        }
        Command::Derivative { expr, wrt, vars } => {
            let scope = parse_bindings(&vars)?;
            let derivative = engine::derivative(Expression::parse(expr.as_str()), &wrt);
            println!("{} = {}", derivative, Value::Number(derivative.evaluate(&scope)));
        }
        Command::Integrate { expr, wrt, vars } => {
            let scope = parse_bindings(&vars)?;
            let integral = engine::integrate(Expression::parse(expr.as_str()), &wrt);
            println!("{} = {}", integral, Value::Number(integral.evaluate(&scope)));
        }
        Command::Tokens { expr } => {
            for (result, span) in Token::lexer(&expr).spanned() {
                match result {
                    Ok(token) => println!("{:?} @ {}..{}", token, span.start, span.end),
                    Err(_) => println!("ERROR {:?} @ {}..{}", &expr[span.clone()], span.start, span.end),
                }
            }
        }
    }
    Ok(())
}

/// Builds a scope from `NAME=VALUE` arguments. Values are expressions and
/// may refer to bindings given earlier on the command line.
pub fn parse_bindings(bindings: &[String]) -> Result<Scope, Failure> {
    let mut scope = Scope::new();

    for binding in bindings {
        let (name, value) = split_binding(binding).map_err(|error| Failure {
            filename: "<var>".to_string(),
            source: binding.clone(),
            error,
        })?;

        let value = Expression::parse(value)
            .evaluate(&scope)
            .map_err(|error| Failure {
                filename: format!("<var {}>", name),
                source: value.to_string(),
                error,
            })?;

        tracing::debug!(name, %value, "bound variable");
        scope.set(name, value);
    }

    Ok(scope)
}

fn split_binding(binding: &str) -> MathResult<(&str, &str)> {
    let invalid = |reason: &str| MathError::InvalidBinding {
        binding: binding.to_string(),
        reason: reason.to_string(),
    };

    let (name, value) = binding
        .split_once('=')
        .ok_or_else(|| invalid("expected NAME=VALUE"))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("name must be an identifier"));
    }

    if value.trim().is_empty() {
        return Err(invalid("missing value"));
    }

    Ok((name, value))
}
