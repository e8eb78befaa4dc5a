//! Error rendering using ariadne
//!
//! Renders an [`Error`] as a report with the error code, a snippet of the
//! expression, a label under the offending characters and a help line.
//! Errors that do not point at any particular character are rendered on a
//! single line.

use crate::Error;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error with colors to stderr
///
/// # Example
/// ```no_run
/// use dijkstra::{EvaluatorOptions, evaluate_source, render_error};
///
/// if let Err(e) = evaluate_source("1 + a", &EvaluatorOptions::default()) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let eval_error = &error.error;

    let Some(span) = eval_error.span() else {
        writeln!(writer, "Error [{}]: {}", eval_error.code(), eval_error)?;
        return writeln!(writer, "  help: {}", eval_error.help());
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let message = eval_error.to_string();
    let report = Report::build(ReportKind::Error, (SOURCE_ID, span.0.clone()))
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_code(eval_error.code())
        .with_message(&message)
        .with_label(
            Label::new((SOURCE_ID, span.0))
                .with_message(&message)
                .with_color(colors.next()),
        )
        .with_help(eval_error.help());

    report
        .finish()
        .write((SOURCE_ID, Source::from(error.source_text.as_str())), &mut *writer)
}
