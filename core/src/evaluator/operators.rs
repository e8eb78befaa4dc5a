//! Binary operator implementations.

use crate::{errors::EvalError, scanner::BinaryOp, scanner::Span};

/// Evaluate a binary operation on two floats.
///
/// Division by exactly zero (either sign) is an error; there is no epsilon.
/// Everything else follows IEEE 754, so overflow yields infinity.
pub(super) fn eval_binary(
    op: BinaryOp,
    left: f64,
    right: f64,
    span: &Span,
) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero { span: span.clone() })
            } else {
                Ok(left / right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span() -> Span {
        Span::new(0, 1)
    }

    #[test]
    fn test_add() {
        assert_eq!(eval_binary(BinaryOp::Add, 2.0, 3.0, &span()), Ok(5.0));
        assert_eq!(eval_binary(BinaryOp::Add, -5.0, 3.0, &span()), Ok(-2.0));
    }

    #[test]
    fn test_sub_is_ordered() {
        assert_eq!(eval_binary(BinaryOp::Sub, 10.0, 4.0, &span()), Ok(6.0));
        assert_eq!(eval_binary(BinaryOp::Sub, 4.0, 10.0, &span()), Ok(-6.0));
    }

    #[test]
    fn test_mul() {
        assert_eq!(eval_binary(BinaryOp::Mul, 3.0, 4.0, &span()), Ok(12.0));
        assert_eq!(eval_binary(BinaryOp::Mul, -2.0, 0.5, &span()), Ok(-1.0));
    }

    #[test]
    fn test_div_is_ordered() {
        assert_eq!(eval_binary(BinaryOp::Div, 10.0, 4.0, &span()), Ok(2.5));
        assert_eq!(eval_binary(BinaryOp::Div, 4.0, 10.0, &span()), Ok(0.4));
    }

    #[test]
    fn test_div_by_zero() {
        let result = eval_binary(BinaryOp::Div, 10.0, 0.0, &Span::new(2, 3));
        assert_eq!(
            result,
            Err(EvalError::DivisionByZero {
                span: Span::new(2, 3)
            })
        );

        // Negative zero compares equal to zero.
        let result = eval_binary(BinaryOp::Div, 1.0, -0.0, &span());
        assert!(matches!(result, Err(EvalError::DivisionByZero { .. })));
    }

    #[test]
    fn test_div_by_tiny_value_is_allowed() {
        let result = eval_binary(BinaryOp::Div, 1.0, f64::MIN_POSITIVE, &span()).unwrap();
        assert!(result.is_finite() && result > 0.0);
    }

    #[test]
    fn test_overflow_produces_infinity() {
        let result = eval_binary(BinaryOp::Mul, f64::MAX, 2.0, &span()).unwrap();
        assert!(result.is_infinite() && result.is_sign_positive());
    }
}
