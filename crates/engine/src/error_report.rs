// Error reporting with Ariadne for evaluation
//
// Renders a MathError against the expression source it came from.

use crate::MathError;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io;
use std::ops::Range;

type SourceSpan<'a> = (&'a str, Range<usize>);

/// Print a MathError as an Ariadne report on stderr
pub fn report_math_error(filename: &str, source: &str, error: &MathError) -> io::Result<()> {
    for report in build_reports(filename, error, true) {
        report.eprint((filename, Source::from(source)))?;
    }
    Ok(())
}

/// Render a MathError as plain text (no colors)
pub fn render_math_error(filename: &str, source: &str, error: &MathError) -> String {
    let mut out = Vec::new();
    for report in build_reports(filename, error, false) {
        let _ = report.write((filename, Source::from(source)), &mut out);
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build_reports<'a>(
    filename: &'a str,
    error: &MathError,
    color: bool,
) -> Vec<Report<'a, SourceSpan<'a>>> {
    let config = Config::default().with_color(color);

    match error {
        MathError::Parse(errors) => errors
            .iter()
            .map(|e| {
                parser::error::build_report(filename, e)
                    .with_config(config)
                    .finish()
            })
            .collect(),

        // The wrapper carries no location; report the real cause
        MathError::InvalidExpression { cause, .. } => build_reports(filename, cause, color),

        other => vec![build_report(filename, other).with_config(config).finish()],
    }
}

fn build_report<'a>(filename: &'a str, error: &MathError) -> ariadne::ReportBuilder<'a, SourceSpan<'a>> {
    let span = error.span();
    let offset = span.as_ref().map(|s| s.start).unwrap_or(0);

    let (code, message, help, label) = match error {
        MathError::UndefinedSymbol { name, .. } => (
            "E102",
            format!("Undefined symbol '{}'", name),
            format!("'{}' is not bound in the scope and is not a known constant or function", name),
            format!("'{}' used here but not defined", name),
        ),
        MathError::TypeError {
            expected,
            found,
            context,
            ..
        } => (
            "E103",
            format!("Type Error in {}", context),
            format!("Expected {}, but found {}", expected, found),
            format!("This has type {}", found),
        ),
        MathError::ArityMismatch {
            function,
            expected,
            found,
            ..
        } => (
            "E104",
            format!("Wrong number of arguments for '{}'", function),
            format!("'{}' takes {} argument(s)", function, expected),
            format!("called with {} argument(s)", found),
        ),
        MathError::UnsupportedShape {
            operation,
            rows,
            cols,
        } => (
            "E105",
            error.to_string(),
            format!("{} received a {}x{} matrix", operation, rows, cols),
            String::new(),
        ),
        MathError::SingularMatrix => (
            "E106",
            error.to_string(),
            "The determinant is zero".to_string(),
            String::new(),
        ),
        MathError::InvalidBinding { reason, .. } => (
            "E108",
            error.to_string(),
            reason.clone(),
            String::new(),
        ),
        // Handled by build_reports
        MathError::Parse(_) | MathError::InvalidExpression { .. } => (
            "E100",
            error.to_string(),
            String::new(),
            String::new(),
        ),
    };

    let report = Report::build(ReportKind::Error, filename, offset)
        .with_code(code)
        .with_message(message);

    let report = if help.is_empty() {
        report
    } else {
        report.with_help(help)
    };

    match span {
        Some(span) => report.with_label(
            Label::new((filename, span))
                .with_message(label)
                .with_color(Color::Red),
        ),
        None => report,
    }
}
