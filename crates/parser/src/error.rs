// Error reporting with Ariadne
//
// Parse errors are chumsky `Simple` errors carrying byte spans into the
// expression source; this module renders them as Ariadne reports.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// One-line description of a parse error, without source context.
pub fn describe(error: &ParseError) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("Unclosed delimiter '{}'", delimiter)
        }
        SimpleReason::Unexpected => match error.found() {
            Some(token) => format!("Unexpected token '{}'", token),
            None => "Unexpected end of input".to_string(),
        },
    }
}

/// Renders parse errors into a string, without colors (used by tests and
/// by callers that log instead of printing).
pub fn render_errors(filename: &str, source: &str, errors: &[ParseError]) -> String {
    let mut out = Vec::new();
    for error in errors {
        let _ = build_report(filename, error)
            .with_config(ariadne::Config::default().with_color(false))
            .finish()
            .write((filename, Source::from(source)), &mut out);
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Builds the Ariadne report for a single parse error.
pub fn build_report<'a>(
    filename: &'a str,
    error: &ParseError,
) -> ariadne::ReportBuilder<'a, (&'a str, std::ops::Range<usize>)> {
    let span = error.span();

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_code("E001")
        .with_message("Parse Error")
        .with_label(
            Label::new((filename, span))
                .with_message(describe(error))
                .with_color(Color::Red),
        );

    // Add expected tokens if available (limit to 5 to avoid overwhelming output)
    if error.expected().len() > 0 {
        let expected: Vec<String> = error.expected().take(5).map(format_expected).collect();

        let help_msg = if error.expected().len() > 5 {
            format!("Expected one of: {}, ...", expected.join(", "))
        } else {
            format!("Expected: {}", expected.join(", "))
        };

        report.with_help(help_msg)
    } else {
        report
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Identifier(_)) => "identifier".to_string(),
        Some(Token::Number(_)) => "number".to_string(),
        Some(t) => format!("'{}'", t),
        None => "end of input".to_string(),
    }
}
