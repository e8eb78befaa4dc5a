//! Lexical scanning of arithmetic expressions.
//!
//! The scanner is lazy: the evaluator pulls one lexeme at a time, so the
//! whole evaluation stays a single left-to-right pass over the input and an
//! invalid character is reported only once the scan actually reaches it.
//!
//! All positions are zero-based **character** offsets, not byte offsets.

use core::{fmt, iter::Peekable, ops::Range, str::CharIndices};

use crate::errors::EvalError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
}

/// The four supported binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter. An open parenthesis on the
    /// operator stack counts as 0, below every operator.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// A run of digits and dots, not yet validated as a number.
    Number(&'src str),
    Operator(BinaryOp),
    LeftParen,
    RightParen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

/// Splits an expression into [`Lexeme`]s on demand.
///
/// Yields `Err(EvalError::InvalidCharacter { .. })` for the first character
/// that cannot start a token, and nothing after that.
pub struct Scanner<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    /// Character offset of the next unread character.
    position: usize,
    failed: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            failed: false,
        }
    }

    fn is_number_char(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }

    /// Consumes the rest of a numeric literal whose first character starts at
    /// byte `offset`, returning the literal's text.
    fn scan_number(&mut self, offset: usize) -> &'src str {
        // Digits and dots are single-byte, so byte length tracks char count.
        let mut end = offset + 1;
        while let Some(&(_, c)) = self.chars.peek() {
            if !Self::is_number_char(c) {
                break;
            }
            self.chars.next();
            self.position += 1;
            end += 1;
        }
        &self.source[offset..end]
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Lexeme<'src>, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let (offset, c) = self.chars.next()?;
            let start = self.position;
            self.position += 1;

            let token = match c {
                c if c.is_ascii_whitespace() => continue,
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                c if Self::is_number_char(c) => Token::Number(self.scan_number(offset)),
                c => match BinaryOp::from_char(c) {
                    Some(op) => Token::Operator(op),
                    None => {
                        self.failed = true;
                        return Some(Err(EvalError::InvalidCharacter {
                            character: c,
                            position: start,
                        }));
                    }
                },
            };

            return Some(Ok(Lexeme {
                token,
                span: Span::new(start, self.position),
            }));
        }
    }
}
