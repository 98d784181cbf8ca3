//! Tokenizer for sanitized arithmetic expressions.

use std::fmt;

use crate::error::ParseError;

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// A token together with the character offset it started at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
        }
    }
}

/// Split an expression into tokens, skipping whitespace.
///
/// Numbers take at most one decimal point and may start or end with it
/// (`.5`, `5.`). A second point starts a new number, which the parser then
/// rejects as a missing operator.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let kind = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '0'..='9' | '.' => {
                let start = i;
                let mut seen_dot = false;
                while i < chars.len() {
                    match chars[i] {
                        '0'..='9' => {}
                        '.' if !seen_dot => seen_dot = true,
                        _ => break,
                    }
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = parse_number(&literal)?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                });
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            other => return Err(ParseError::UnknownChar(other)),
        };
        tokens.push(Token { kind, position: i });
        i += 1;
    }

    Ok(tokens)
}

fn parse_number(literal: &str) -> Result<f64, ParseError> {
    if literal == "." {
        return Err(ParseError::InvalidNumber(literal.to_string()));
    }
    literal
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(literal.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_operators_and_numbers() {
        assert_eq!(
            kinds("2 + 3.5*(4)"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Plus,
                TokenKind::Number(3.5),
                TokenKind::Star,
                TokenKind::LParen,
                TokenKind::Number(4.0),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_dangling_points() {
        assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5)]);
        assert_eq!(kinds("5."), vec![TokenKind::Number(5.0)]);
        assert_eq!(
            kinds("1.2.3"),
            vec![TokenKind::Number(1.2), TokenKind::Number(0.3)]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("12 -  4").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 3, 6]);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            tokenize("1+."),
            Err(ParseError::InvalidNumber(".".to_string()))
        );
        assert_eq!(tokenize("1%2"), Err(ParseError::UnknownChar('%')));
    }
}
