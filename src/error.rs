//! Domain-specific error types for zcalc.
//!
//! Every failure the engine can report is a variant here. The engine never
//! panics or propagates these to its caller implicitly; `evaluate` hands them
//! back as values and switches the display into its error state.

use thiserror::Error;

/// Failure of the sanitize stage. The buffer is kept so the user can fix it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    /// A character outside the arithmetic alphabet was found.
    #[error("Disallowed character '{ch}' at position {position}")]
    DisallowedChar { ch: char, position: usize },

    /// The number of `(` differs from the number of `)`.
    #[error("Unbalanced parentheses: {open} opening, {close} closing")]
    UnbalancedParens { open: usize, close: usize },
}

/// Grammar errors raised while tokenizing or parsing a sanitized expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token appeared where the grammar does not allow it.
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    /// The expression ended while an operand or `)` was still expected.
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// A numeric literal could not be read (e.g. a lone `.`).
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// Parentheses nested deeper than the parser accepts.
    #[error("Expression nested deeper than {0} levels")]
    TooDeep(usize),

    /// A character the tokenizer has no rule for.
    #[error("Unknown character '{0}'")]
    UnknownChar(char),
}

/// Failures after sanitizing succeeded. The buffer is cleared.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression is not well-formed arithmetic.
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParseError),

    /// The expression evaluated to NaN or an infinity (e.g. `5/0`).
    #[error("Result is not a finite number ({0})")]
    NonFinite(f64),
}

/// Top-level calculator error, tagged by the stage that failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Input rejected before evaluation.
    #[error("Rejected input: {0}")]
    Rejected(#[from] SanitizeError),

    /// Evaluation of sanitized input failed.
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
}

impl CalcError {
    /// Whether the engine keeps its buffer after this error.
    pub fn preserves_buffer(&self) -> bool {
        matches!(self, CalcError::Rejected(_))
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        CalcError::Evaluation(EvalError::Syntax(e))
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[source] toml::ser::Error),

    /// Failed to save the config file.
    #[error("Failed to save config: {0}")]
    SaveFailed(#[source] std::io::Error),
}
