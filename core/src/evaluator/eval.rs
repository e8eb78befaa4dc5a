//! Core evaluation logic.

use crate::{
    String,
    errors::{Delimiter, EvalError},
    evaluator::{EvaluatorOptions, operators::eval_binary},
    scanner::{BinaryOp, Lexeme, Scanner, Span, Token},
    stack::BoundedStack,
};

/// A number on the operand stack, with the part of the input it came from.
#[derive(Debug, Clone, PartialEq)]
struct Operand {
    value: f64,
    span: Span,
}

/// An entry on the operator stack.
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    /// An open parenthesis; only ever popped by its matching `)`.
    Open(Span),
    Apply(BinaryOp, Span),
}

impl Pending {
    fn precedence(&self) -> u8 {
        match self {
            Pending::Open(_) => 0,
            Pending::Apply(op, _) => op.precedence(),
        }
    }

    fn is_open(&self) -> bool {
        matches!(self, Pending::Open(_))
    }
}

/// Two-stack evaluator for a single expression.
///
/// Owns both stacks for the duration of one evaluation; [`Evaluator::eval`]
/// consumes it, so nothing carries over between calls.
pub struct Evaluator<'src> {
    options: EvaluatorOptions,
    source: &'src str,
    operands: BoundedStack<Operand>,
    operators: BoundedStack<Pending>,
}

impl<'src> Evaluator<'src> {
    /// Create an evaluator for `source`, sizing both stacks to its length.
    pub fn new(options: EvaluatorOptions, source: &'src str) -> Self {
        let capacity = options.stack_capacity(source.chars().count());
        Self {
            options,
            source,
            operands: BoundedStack::new(capacity),
            operators: BoundedStack::new(capacity),
        }
    }

    /// Evaluate the expression in one left-to-right pass.
    pub fn eval(mut self) -> Result<f64, EvalError> {
        tracing::debug!(
            source = self.source,
            capacity = self.operands.capacity(),
            "evaluating expression"
        );

        for lexeme in Scanner::new(self.source) {
            let Lexeme { token, span } = lexeme?;
            match token {
                Token::LeftParen => self.operators.push(Pending::Open(span))?,
                Token::Number(literal) => self.push_literal(literal, span)?,
                Token::Operator(op) => self.push_operator(op, span)?,
                Token::RightParen => self.close_group(span)?,
            }
        }

        self.drain()?;
        let result = self.finish()?;
        tracing::debug!(result, "evaluation finished");
        Ok(result)
    }

    fn push_literal(&mut self, literal: &str, span: Span) -> Result<(), EvalError> {
        let value = literal
            .parse::<f64>()
            .map_err(|_| EvalError::MalformedOperand {
                literal: String::from(literal),
                span: span.clone(),
            })?;
        self.operands.push(Operand { value, span })?;
        Ok(())
    }

    /// Reduce every pending operator that binds at least as tightly as `op`,
    /// then queue `op`. The `>=` makes equal precedence left-associative.
    fn push_operator(&mut self, op: BinaryOp, span: Span) -> Result<(), EvalError> {
        while self
            .operators
            .peek()
            .is_ok_and(|top| top.precedence() >= op.precedence())
        {
            self.apply_top()?;
        }
        self.operators.push(Pending::Apply(op, span))?;
        Ok(())
    }

    /// Reduce everything back to the matching `(` and discard it.
    fn close_group(&mut self, span: Span) -> Result<(), EvalError> {
        while self.operators.peek().is_ok_and(|top| !top.is_open()) {
            self.apply_top()?;
        }
        if self.operators.pop().is_err() {
            return Err(EvalError::MismatchedParenthesis {
                missing: Delimiter::Opening,
                span,
            });
        }
        Ok(())
    }

    /// Apply whatever is left on the operator stack, most recent first.
    fn drain(&mut self) -> Result<(), EvalError> {
        while let Ok(top) = self.operators.peek() {
            if top.is_open() && !self.options.strict_parentheses {
                let open = self.operators.pop()?;
                tracing::debug!(?open, "ignoring unclosed parenthesis");
                continue;
            }
            self.apply_top()?;
        }
        Ok(())
    }

    /// Pop one pending entry and, if it is an operator, reduce with it.
    ///
    /// Reaching an open parenthesis here means it was never closed.
    fn apply_top(&mut self) -> Result<(), EvalError> {
        match self.operators.pop()? {
            Pending::Apply(op, span) => self.reduce(op, span),
            Pending::Open(span) => Err(EvalError::MismatchedParenthesis {
                missing: Delimiter::Closing,
                span,
            }),
        }
    }

    /// Pop the right then the left operand, combine them with `op` and push
    /// the result back.
    fn reduce(&mut self, op: BinaryOp, span: Span) -> Result<(), EvalError> {
        let missing = || EvalError::MissingOperand {
            operator: op,
            span: span.clone(),
        };
        let right = self.operands.pop().map_err(|_| missing())?;
        let left = self.operands.pop().map_err(|_| missing())?;

        let value = eval_binary(op, left.value, right.value, &span)?;
        tracing::trace!(%op, left = left.value, right = right.value, value, "reduced");

        self.operands.push(Operand {
            value,
            span: Span::combine(&left.span, &right.span),
        })?;
        Ok(())
    }

    fn finish(mut self) -> Result<f64, EvalError> {
        let result = self
            .operands
            .pop()
            .map_err(|_| EvalError::EmptyExpression)?;

        if !self.operands.is_empty() {
            if self.options.strict_operands {
                return Err(EvalError::MissingOperator { span: result.span });
            }
            tracing::debug!(
                discarded = self.operands.len(),
                "returning top operand, discarding the rest"
            );
        }

        Ok(result.value)
    }
}
