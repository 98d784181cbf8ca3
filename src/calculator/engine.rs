//! The expression engine behind the keypad.
//!
//! Owns the in-progress expression and the text the display should show.
//! Appends, deletes and clears never fail; `evaluate` reports failures as
//! values and reflects them in the display.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use super::evaluation::{DEFAULT_PRECISION, MAX_PRECISION, evaluate_expression, format_result};
use crate::error::CalcError;
use crate::input::Action;

/// Text shown while the engine is in its error state.
pub const ERROR_TEXT: &str = "Error";

/// Text shown for an empty buffer.
const EMPTY_TEXT: &str = "0";

lazy_static! {
    /// Characters that end the number currently being typed.
    static ref NUMBER_BOUNDARY: Regex = Regex::new(r"[+\-*/()]").unwrap();
}

/// Whether the buffer is being built or holds a fresh result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Being built by appends, deletes and clears.
    #[default]
    Editing,
    /// Just replaced by a successful evaluation.
    Settled,
}

/// Accumulates an arithmetic expression and evaluates it on demand.
#[derive(Debug, Clone)]
pub struct ExpressionEngine {
    buffer: String,
    error: Option<CalcError>,
    mode: Mode,
    precision: u32,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Create an empty engine that keeps `precision` fractional digits in
    /// results. Values above [`MAX_PRECISION`] are clamped.
    pub fn with_precision(precision: u32) -> Self {
        Self {
            buffer: String::new(),
            error: None,
            mode: Mode::Editing,
            precision: precision.min(MAX_PRECISION),
        }
    }

    /// Create an engine as if `text` had been typed one character at a time.
    pub fn with_expression(text: &str) -> Self {
        let mut engine = Self::new();
        engine.type_text(text);
        engine
    }

    /// The raw expression buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The text the display should render right now.
    pub fn display_text(&self) -> &str {
        if self.error.is_some() {
            ERROR_TEXT
        } else if self.buffer.is_empty() {
            EMPTY_TEXT
        } else {
            &self.buffer
        }
    }

    /// Whether the buffer is being edited or holds a settled result.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Fractional digits kept when a result settles.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// The failure behind the current error display, if any.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Append a single token, applying the leading-zero and decimal-point
    /// guards.
    pub fn append(&mut self, token: char) {
        self.touch();

        if self.buffer == "0" && token == '0' {
            trace!("Ignored repeated leading zero");
            return;
        }

        if token == '.' {
            let segment = NUMBER_BOUNDARY.split(&self.buffer).last().unwrap_or("");
            if segment.contains('.') {
                trace!(segment, "Ignored second decimal point");
                return;
            }
            if segment.is_empty() {
                self.buffer.push('0');
            }
        }

        self.buffer.push(token);
    }

    /// Append every character of `text` in order.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.append(c);
        }
    }

    /// Remove the last character, if any.
    pub fn delete_last(&mut self) {
        self.touch();
        self.buffer.pop();
    }

    /// Reset to an empty buffer.
    pub fn clear(&mut self) {
        self.touch();
        self.buffer.clear();
    }

    /// Evaluate the buffer.
    ///
    /// Returns `Ok(None)` without touching any state when the buffer is blank.
    /// On success the buffer is replaced by the formatted result. Rejected
    /// input keeps the buffer so it can be corrected; every other failure
    /// clears it. Either way the display shows [`ERROR_TEXT`].
    pub fn evaluate(&mut self) -> Result<Option<f64>, CalcError> {
        if self.buffer.trim().is_empty() {
            return Ok(None);
        }

        match evaluate_expression(&self.buffer, self.precision) {
            Ok(value) => {
                let text = format_result(value);
                debug!(expression = %self.buffer, result = %text, "Evaluated expression");
                self.buffer = text;
                self.error = None;
                self.mode = Mode::Settled;
                Ok(Some(value))
            }
            Err(e) => {
                debug!(expression = %self.buffer, error = %e, "Evaluation failed");
                if !e.preserves_buffer() {
                    self.buffer.clear();
                }
                self.error = Some(e.clone());
                self.mode = Mode::Editing;
                Err(e)
            }
        }
    }

    /// Run a single keypad or keyboard action.
    ///
    /// Evaluation failures are already reflected in the display, so they are
    /// not returned here; use [`ExpressionEngine::last_error`] to inspect them.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Append(token) => self.append(token),
            Action::DeleteLast => self.delete_last(),
            Action::Clear => self.clear(),
            Action::Evaluate => {
                let _ = self.evaluate();
            }
        }
    }

    /// Any edit leaves the error and settled states.
    fn touch(&mut self) {
        self.error = None;
        self.mode = Mode::Editing;
    }
}
