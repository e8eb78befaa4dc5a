use logos::Logos;

/// Tokens as seen by the line editor.
///
/// This is deliberately looser than the evaluator's scanner: it only has to
/// be good enough to color the input and to count parentheses while the user
/// is still typing.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\x0C\r]+")]
pub enum Token {
    #[regex(r"[0-9.]+")]
    Number,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

/// Number of parentheses still open at the end of `buffer`.
///
/// Returns `None` if the buffer contains a character the evaluator would
/// reject, since there is no point waiting for more input in that case.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokens() {
        let tokens: Vec<_> = Token::lexer("(1.5 + .2) * 3")
            .map(|t| t.expect("lex failed"))
            .collect();
        assert_eq!(
            tokens,
            [
                Token::LParen,
                Token::Number,
                Token::Operator,
                Token::Number,
                Token::RParen,
                Token::Operator,
                Token::Number,
            ]
        );
    }

    #[test]
    fn test_calculate_depth() {
        assert_eq!(calculate_depth("1 + 2"), Some(0));
        assert_eq!(calculate_depth("(1 + (2"), Some(2));
        assert_eq!(calculate_depth("(1 + (2))"), Some(0));
        assert_eq!(calculate_depth("1)"), Some(0));
        assert_eq!(calculate_depth("(1 + x"), None);
        assert_eq!(calculate_depth("(1\u{a0}+ 2"), None);
    }
}
