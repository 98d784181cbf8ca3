//! Expression evaluation.
//!
//! Runs the sanitize stage, parses and evaluates the normalized text, and
//! post-processes the numeric result so floating-point noise never reaches
//! the display.

use tracing::debug;

use super::parser::eval_str;
use super::sanitize::sanitize;
use crate::error::{CalcError, EvalError};

/// Fractional digits kept when settling a result.
pub const DEFAULT_PRECISION: u32 = 12;

/// Upper bound for a configured precision; beyond this `f64` has no digits left.
pub const MAX_PRECISION: u32 = 15;

/// Largest magnitude below which every integer is exact in an `f64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Evaluate an expression and round the result to `precision` fractional
/// digits.
///
/// Sanitize failures come back as [`CalcError::Rejected`]; grammar failures
/// and non-finite results as [`CalcError::Evaluation`].
pub fn evaluate_expression(input: &str, precision: u32) -> Result<f64, CalcError> {
    let normalized = sanitize(input)?;
    let value = eval_str(&normalized)?;

    if !value.is_finite() {
        debug!(expression = %normalized, %value, "Expression produced a non-finite result");
        return Err(EvalError::NonFinite(value).into());
    }

    Ok(round_to_precision(value, precision))
}

/// Round to `precision` fractional digits after nudging by one machine
/// epsilon, with halves rounded towards positive infinity.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = (value + f64::EPSILON) * scale;

    // Already an integer at this scale
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    round_half_up(scaled) / scale
}

fn round_half_up(x: f64) -> f64 {
    let rounded = x.round();
    // f64::round sends negative halves away from zero
    if x < 0.0 && x - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Render a settled value as the shortest decimal text that parses back to
/// the same `f64`.
///
/// Never uses exponent notation, so the text stays inside the arithmetic
/// alphabet and can be evaluated again. Negative zero renders as `0`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
