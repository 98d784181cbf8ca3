//! Calculator module for building and evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Accumulate an expression from keypad and keyboard input
//! - Sanitize it and evaluate it with a recursive-descent evaluator
//! - Format results without floating-point noise

mod engine;
mod evaluation;
mod lexer;
mod parser;
mod sanitize;

pub use engine::{ERROR_TEXT, ExpressionEngine, Mode};
pub use evaluation::{
    DEFAULT_PRECISION, MAX_PRECISION, evaluate_expression, format_result, round_to_precision,
};
pub use parser::{MAX_DEPTH, eval_str};
pub use sanitize::{normalize_glyphs, sanitize};
