//! Two-stack (Dijkstra) evaluator for arithmetic expressions.
//!
//! The evaluator scans the input once, left to right, keeping numbers on an
//! operand stack and not-yet-applied operators on an operator stack. An
//! incoming operator first reduces every pending operator of greater or equal
//! precedence; `)` reduces back to its `(`. No parse tree is built.
//!
//! ## Design Principles
//!
//! - **Never panic**: All malformed inputs are reported as an [`EvalError`]
//! - **Bounded**: Both stacks are sized to the input length up front
//! - **Stateless**: Each call owns its stacks, so calls are independent
//!
//! ## Example
//!
//! ```
//! use dijkstra_core::evaluator::evaluate;
//!
//! assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
//! assert_eq!(evaluate("8 - 3 - 2"), Ok(3.0));
//! ```

mod eval;
mod operators;
mod options;


pub use eval::Evaluator;
pub use options::EvaluatorOptions;

use crate::errors::EvalError;

/// Evaluate an expression with the default (permissive) options.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with_options(expression, &EvaluatorOptions::default())
}

/// Evaluate an expression with explicit options.
///
/// ## Example
///
/// ```
/// use dijkstra_core::{errors::EvalError, evaluator::{EvaluatorOptions, evaluate_with_options}};
///
/// let strict = EvaluatorOptions::strict();
/// assert!(matches!(
///     evaluate_with_options("1 2", &strict),
///     Err(EvalError::MissingOperator { .. })
/// ));
/// ```
pub fn evaluate_with_options(
    expression: &str,
    options: &EvaluatorOptions,
) -> Result<f64, EvalError> {
    Evaluator::new(options.clone(), expression).eval()
}
