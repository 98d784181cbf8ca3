//! Pre-evaluation validation of the expression buffer.
//!
//! Normalizes display glyphs to ASCII operators and rejects anything that is
//! not plain arithmetic. No grammar checks happen here: `1++` and `()` pass.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::error::SanitizeError;

lazy_static! {
    /// Multiplication glyphs shown on buttons or pasted from elsewhere.
    static ref MULTIPLY_GLYPHS: Regex = Regex::new(r"[×x✕]").unwrap();

    /// Division glyph.
    static ref DIVIDE_GLYPHS: Regex = Regex::new(r"÷").unwrap();

    /// En dash and the Unicode minus sign.
    static ref MINUS_GLYPHS: Regex = Regex::new(r"[–−]").unwrap();

    /// Digits, the four operators, parentheses, dots and whitespace only.
    static ref ARITHMETIC_ONLY: Regex = Regex::new(r"^[0-9+\-*/().\s]*$").unwrap();
}

/// Map operator glyphs to their ASCII equivalents.
///
/// Every replacement is a single character, so positions in the output line
/// up with positions in the input.
pub fn normalize_glyphs(input: &str) -> String {
    let normalized = MULTIPLY_GLYPHS.replace_all(input, "*");
    let normalized = DIVIDE_GLYPHS.replace_all(&normalized, "/");
    MINUS_GLYPHS.replace_all(&normalized, "-").into_owned()
}

/// Sanitize an expression, returning the normalized text ready for parsing.
pub fn sanitize(input: &str) -> Result<String, SanitizeError> {
    let normalized = normalize_glyphs(input);

    if !ARITHMETIC_ONLY.is_match(&normalized) {
        // Locate the offender for the error report
        let (position, ch) = normalized
            .chars()
            .enumerate()
            .find(|(_, c)| !is_arithmetic_char(*c))
            .unwrap_or((0, '\u{fffd}'));
        trace!(%ch, position, "Rejected disallowed character");
        return Err(SanitizeError::DisallowedChar { ch, position });
    }

    let open = normalized.matches('(').count();
    let close = normalized.matches(')').count();
    if open != close {
        trace!(open, close, "Rejected unbalanced parentheses");
        return Err(SanitizeError::UnbalancedParens { open, close });
    }

    Ok(normalized)
}

fn is_arithmetic_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
}
