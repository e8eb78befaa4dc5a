//! Configuration options for the evaluator.

/// Policies and limits for a single evaluation.
///
/// The defaults are permissive: an unclosed `(` at the end of the input is
/// dropped, and if several operands are left over only the topmost is
/// returned.
///
/// # Example
///
/// ```
/// use dijkstra_core::evaluator::{EvaluatorOptions, evaluate_with_options};
///
/// let options = EvaluatorOptions {
///     max_stack_size: Some(64),
///     ..EvaluatorOptions::strict()
/// };
/// assert!(evaluate_with_options("(1 + 2", &options).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Upper bound on the size of each evaluation stack.
    ///
    /// Both stacks are always sized to the number of characters in the
    /// expression, which is enough for any input; this can only lower that.
    ///
    /// Default: None
    pub max_stack_size: Option<usize>,

    /// Reject a `(` that is still open when the input ends.
    ///
    /// Default: false
    pub strict_parentheses: bool,

    /// Reject input that leaves more than one operand, such as `1 2`.
    ///
    /// Default: false
    pub strict_operands: bool,
}

impl EvaluatorOptions {
    /// Options that reject every malformed input the default tolerates.
    pub fn strict() -> Self {
        Self {
            strict_parentheses: true,
            strict_operands: true,
            ..Self::default()
        }
    }

    /// Capacity for both stacks when evaluating an expression of
    /// `expression_len` characters.
    pub(crate) fn stack_capacity(&self, expression_len: usize) -> usize {
        match self.max_stack_size {
            Some(max) => max.min(expression_len),
            None => expression_len,
        }
    }
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_stack_size: None,
            strict_parentheses: false,
            strict_operands: false,
        }
    }
}
