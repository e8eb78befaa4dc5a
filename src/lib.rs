//! Dijkstra - two-stack evaluation of arithmetic expressions
//!
//! # Overview
//!
//! Expressions use the four binary operators `+ - * /`, parentheses, decimal
//! literals such as `12`, `3.5` or `.5`, and ASCII whitespace. They are evaluated in
//! a single left-to-right pass with an operand stack and an operator stack;
//! no parse tree is built.
//!
//! # Quick Start
//!
//! ```
//! use dijkstra::{EvalError, evaluate};
//!
//! assert_eq!(evaluate("(1 + (2 * 3))"), Ok(7.0));
//! assert_eq!(evaluate("8 - 3 - 2"), Ok(3.0));
//! assert!(matches!(evaluate("5 / 0"), Err(EvalError::DivisionByZero { .. })));
//! ```
//!
//! # Strictness
//!
//! By default an unclosed `(` at the end of the input is ignored and, if the
//! input leaves several operands behind (as in `1 2`), the last one wins.
//! [`EvaluatorOptions::strict`] turns both into errors:
//!
//! ```
//! use dijkstra::{EvaluatorOptions, evaluate, evaluate_with_options};
//!
//! assert_eq!(evaluate("(1 + 2"), Ok(3.0));
//! assert!(evaluate_with_options("(1 + 2", &EvaluatorOptions::strict()).is_err());
//! ```
//!
//! # Error Reporting
//!
//! [`Error`] pairs an [`EvalError`] with the text it came from so that
//! [`render_error`] can point at the offending characters.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export the public API from dijkstra_core
pub use dijkstra_core::errors::{Delimiter, EvalError};
pub use dijkstra_core::evaluator::{Evaluator, EvaluatorOptions, evaluate, evaluate_with_options};
pub use dijkstra_core::scanner::{BinaryOp, Span};
pub use dijkstra_core::stack::{BoundedStack, StackError};

use thiserror::Error as ThisError;

/// An evaluation error together with the expression that caused it.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("{error}")]
pub struct Error {
    pub source_text: String,
    pub error: EvalError,
}

impl Error {
    pub fn new(source_text: impl Into<String>, error: EvalError) -> Self {
        Self {
            source_text: source_text.into(),
            error,
        }
    }
}

/// Evaluate `expression` with the given options, keeping the source around
/// for diagnostics on failure.
pub fn evaluate_source(expression: &str, options: &EvaluatorOptions) -> Result<f64, Error> {
    evaluate_with_options(expression, options).map_err(|error| Error::new(expression, error))
}
