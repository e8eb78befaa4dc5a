use crate::lexer::{Token, calculate_depth};
use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::{StyledText, ValidationResult, Validator};

/// Colors cycled through for nested parentheses, outermost first.
const PAREN_PALETTE: &[Color] = &[Color::Yellow, Color::Magenta, Color::Blue];

const DEFAULT_FG: Color = Color::White;

fn paren_style(depth: usize) -> Style {
    Style::new().fg(PAREN_PALETTE[depth % PAREN_PALETTE.len()])
}

fn error_style() -> Style {
    Style::new().fg(Color::Red).underline()
}

/// Syntax highlighting for the interactive prompt.
///
/// Unmatched `)` and characters the evaluator would reject are shown in red.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new().fg(DEFAULT_FG);

        let mut depth = 0usize;
        let mut curr_end = 0;

        for (token, range) in Token::lexer(line).spanned() {
            // Whitespace skipped by the lexer.
            if range.start > curr_end {
                output.push((plain, line[curr_end..range.start].to_string()));
            }

            let style = match token {
                Ok(Token::Number) => Style::new().fg(Color::Cyan),
                Ok(Token::Operator) => Style::new().fg(DEFAULT_FG).bold(),
                Ok(Token::LParen) => {
                    let style = paren_style(depth);
                    depth += 1;
                    style
                }
                Ok(Token::RParen) => match depth.checked_sub(1) {
                    Some(outer) => {
                        depth = outer;
                        paren_style(depth)
                    }
                    None => error_style(),
                },
                Err(_) => error_style(),
            };
            output.push((style, line[range.clone()].to_string()));
            curr_end = range.end;
        }

        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}

/// Keeps reading lines while a `(` is still open.
///
/// Only installed when unclosed parentheses are an error; otherwise the
/// evaluator accepts the line as it is.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
