//! Recursive-descent evaluator for arithmetic expressions.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-')* primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Binary operators are left associative. Unary operators may stack, which
//! makes `5*-3` and `1++2` valid.
//!
//! Values are folded while parsing, so operator chains and unary runs cost no
//! stack. Only parentheses recurse, and their nesting is capped at
//! [`MAX_DEPTH`].

use super::lexer::{Token, TokenKind, tokenize};
use crate::error::ParseError;

/// Deepest parenthesis nesting accepted.
pub const MAX_DEPTH: usize = 256;

/// Parse and evaluate a full expression with IEEE semantics. Division by zero
/// yields an infinity or NaN rather than an error. Trailing tokens are an
/// error.
pub fn eval_str(input: &str) -> Result<f64, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    let value = parser.expr()?;
    match parser.peek() {
        Some(token) => Err(unexpected(token)),
        None => Ok(value),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn expr(&mut self) -> Result<f64, ParseError> {
        let mut lhs = self.term()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Plus => {
                    self.pos += 1;
                    lhs += self.term()?;
                }
                TokenKind::Minus => {
                    self.pos += 1;
                    lhs -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<f64, ParseError> {
        let mut lhs = self.unary()?;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Star => {
                    self.pos += 1;
                    lhs *= self.unary()?;
                }
                TokenKind::Slash => {
                    self.pos += 1;
                    lhs /= self.unary()?;
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<f64, ParseError> {
        let mut negate = false;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Minus => negate = !negate,
                TokenKind::Plus => {}
                _ => break,
            }
            self.pos += 1;
        }
        let value = self.primary()?;
        Ok(if negate { -value } else { value })
    }

    fn primary(&mut self) -> Result<f64, ParseError> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(n) => Ok(n),
            TokenKind::LParen => {
                self.depth += 1;
                if self.depth > MAX_DEPTH {
                    return Err(ParseError::TooDeep(MAX_DEPTH));
                }
                let inner = self.expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            _ => Err(unexpected(token)),
        }
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        position: token.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str) -> f64 {
        eval_str(input).unwrap()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), 14.0);
        assert_eq!(eval("(2+3)*4"), 20.0);
        assert_eq!(eval("10-4/2"), 8.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10-4-3"), 3.0);
        assert_eq!(eval("64/4/2"), 8.0);
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(eval("-5"), -5.0);
        assert_eq!(eval("5*-3"), -15.0);
        assert_eq!(eval("1++2"), 3.0);
        assert_eq!(eval("--2"), 2.0);
        assert_eq!(eval("-+-2"), 2.0);
        assert_eq!(eval("-(1+2)*2"), -6.0);
        assert_eq!(eval("2*-3*4"), -24.0);
    }

    #[test]
    fn test_division_by_zero_is_not_a_parse_error() {
        assert!(eval("5/0").is_infinite());
        assert!(eval("0/0").is_nan());
    }

    #[test]
    fn test_malformed() {
        assert_eq!(eval_str("1+"), Err(ParseError::UnexpectedEnd));
        assert_eq!(eval_str(""), Err(ParseError::UnexpectedEnd));
        assert_eq!(eval_str("-"), Err(ParseError::UnexpectedEnd));
        assert_eq!(
            eval_str("()"),
            Err(ParseError::UnexpectedToken {
                found: ")".to_string(),
                position: 1
            })
        );
        assert_eq!(
            eval_str("2 3"),
            Err(ParseError::UnexpectedToken {
                found: "3".to_string(),
                position: 2
            })
        );
        assert!(eval_str("2*/3").is_err());
        assert!(eval_str(")1(").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(eval_str(&nested(MAX_DEPTH)), Ok(1.0));
        assert_eq!(
            eval_str(&nested(MAX_DEPTH + 1)),
            Err(ParseError::TooDeep(MAX_DEPTH))
        );
        assert_eq!(
            eval_str(&nested(10_000)),
            Err(ParseError::TooDeep(MAX_DEPTH))
        );
    }

    #[test]
    fn test_sibling_groups_do_not_accumulate_depth() {
        let groups = vec!["(1)"; 1_000].join("+");
        assert_eq!(eval_str(&groups), Ok(1_000.0));
    }

    #[test]
    fn test_long_chains() {
        let sum = vec!["1"; 200_000].join("+");
        assert_eq!(eval_str(&sum), Ok(200_000.0));

        let negations = format!("{}7", "-".repeat(100_001));
        assert_eq!(eval_str(&negations), Ok(-7.0));
    }
}
