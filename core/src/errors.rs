//! Evaluation errors.
//!
//! Every failure is reported synchronously as one of these variants; none of
//! them is fatal to the caller, which can report it and carry on.
//!
//! Positional variants carry a [`Span`] of character offsets so front ends can
//! point at the offending part of the input.

use core::fmt;

use thiserror::Error;

use crate::String;
use crate::scanner::{BinaryOp, Span};
use crate::stack::StackError;

/// Which side of a parenthesis pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Opening,
    Closing,
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Opening => write!(f, "opening"),
            Delimiter::Closing => write!(f, "closing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A character that cannot start any token.
    #[error("Invalid character: '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A `)` with no matching `(`, or (in strict mode) a `(` never closed.
    #[error("Mismatched parentheses: missing {missing} parenthesis")]
    MismatchedParenthesis { missing: Delimiter, span: Span },

    /// The input produced no operand at all (empty or whitespace only).
    #[error("Expression is empty or results in no value")]
    EmptyExpression,

    /// Division whose right operand is exactly zero.
    #[error("Division by zero is not allowed")]
    DivisionByZero { span: Span },

    /// One of the evaluation stacks ran out of room.
    #[error("Stack capacity of {capacity} exceeded")]
    StackCapacityExceeded { capacity: usize },

    /// A run of digits and dots that is not a valid decimal number.
    #[error("Malformed number literal '{literal}'")]
    MalformedOperand { literal: String, span: Span },

    /// An operator was applied with fewer than two operands available.
    #[error("Operator '{operator}' is missing an operand")]
    MissingOperand { operator: BinaryOp, span: Span },

    /// Two operands with nothing combining them (strict mode only).
    #[error("Expected an operator before this operand")]
    MissingOperator { span: Span },
}

impl EvalError {
    /// The part of the input this error refers to, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::InvalidCharacter { position, .. } => {
                Some(Span::new(*position, *position + 1))
            }
            EvalError::MismatchedParenthesis { span, .. }
            | EvalError::DivisionByZero { span }
            | EvalError::MalformedOperand { span, .. }
            | EvalError::MissingOperand { span, .. }
            | EvalError::MissingOperator { span } => Some(span.clone()),
            EvalError::EmptyExpression | EvalError::StackCapacityExceeded { .. } => None,
        }
    }

    /// Stable identifier, handy for documentation lookup and tests.
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::InvalidCharacter { .. } => "E001",
            EvalError::MismatchedParenthesis { .. } => "E002",
            EvalError::EmptyExpression => "E003",
            EvalError::DivisionByZero { .. } => "E004",
            EvalError::StackCapacityExceeded { .. } => "E005",
            EvalError::MalformedOperand { .. } => "E006",
            EvalError::MissingOperand { .. } => "E007",
            EvalError::MissingOperator { .. } => "E008",
        }
    }

    /// A short suggestion on how to fix the input.
    pub fn help(&self) -> &'static str {
        match self {
            EvalError::InvalidCharacter { .. } => {
                "Only numbers, + - * /, parentheses and ASCII whitespace are allowed"
            }
            EvalError::MismatchedParenthesis {
                missing: Delimiter::Opening,
                ..
            } => "Remove this ')' or add a matching '(' before it",
            EvalError::MismatchedParenthesis {
                missing: Delimiter::Closing,
                ..
            } => "Add a matching ')' after this '('",
            EvalError::EmptyExpression => "Enter an expression such as (1 + (2 * 3))",
            EvalError::DivisionByZero { .. } => "The right-hand side of '/' evaluates to zero",
            EvalError::StackCapacityExceeded { .. } => {
                "The expression might be too long or complex"
            }
            EvalError::MalformedOperand { .. } => {
                "A number may contain at most one '.' and at least one digit"
            }
            EvalError::MissingOperand { .. } => "Every operator needs a number on each side",
            EvalError::MissingOperator { .. } => "Insert an operator between the two numbers",
        }
    }
}

impl From<StackError> for EvalError {
    /// An empty stack falls back to `EmptyExpression`; the evaluator maps it to
    /// a more specific variant wherever it knows which step failed.
    fn from(err: StackError) -> Self {
        match err {
            StackError::CapacityExceeded { capacity } => {
                EvalError::StackCapacityExceeded { capacity }
            }
            StackError::Empty => EvalError::EmptyExpression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EvalError::InvalidCharacter {
                character: 'a',
                position: 2
            }
            .to_string(),
            "Invalid character: 'a' at position 2"
        );
        assert_eq!(
            EvalError::MismatchedParenthesis {
                missing: Delimiter::Opening,
                span: Span::new(3, 4)
            }
            .to_string(),
            "Mismatched parentheses: missing opening parenthesis"
        );
        assert_eq!(
            EvalError::MissingOperand {
                operator: BinaryOp::Mul,
                span: Span::new(0, 1)
            }
            .to_string(),
            "Operator '*' is missing an operand"
        );
        assert_eq!(
            EvalError::StackCapacityExceeded { capacity: 4 }.to_string(),
            "Stack capacity of 4 exceeded"
        );
    }

    #[test]
    fn test_invalid_character_span() {
        let err = EvalError::InvalidCharacter {
            character: '$',
            position: 7,
        };
        assert_eq!(err.span(), Some(Span::new(7, 8)));
        assert_eq!(EvalError::EmptyExpression.span(), None);
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            EvalError::InvalidCharacter {
                character: 'x',
                position: 0,
            },
            EvalError::MismatchedParenthesis {
                missing: Delimiter::Closing,
                span: Span::new(0, 1),
            },
            EvalError::EmptyExpression,
            EvalError::DivisionByZero {
                span: Span::new(0, 1),
            },
            EvalError::StackCapacityExceeded { capacity: 1 },
            EvalError::MalformedOperand {
                literal: String::from(".."),
                span: Span::new(0, 2),
            },
            EvalError::MissingOperand {
                operator: BinaryOp::Add,
                span: Span::new(0, 1),
            },
            EvalError::MissingOperator {
                span: Span::new(0, 1),
            },
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in &errors[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_from_stack_error() {
        assert_eq!(
            EvalError::from(StackError::CapacityExceeded { capacity: 3 }),
            EvalError::StackCapacityExceeded { capacity: 3 }
        );
    }
}
