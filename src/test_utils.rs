//! Test utilities and factories.
//!
//! This module provides common testing helpers for building engines in a
//! known state. Only compiled in test builds.

use crate::calculator::ExpressionEngine;
use crate::config::AppConfig;
use crate::input::Action;

/// Create a mock AppConfig with default values.
pub fn mock_config() -> AppConfig {
    AppConfig::default()
}

/// Create an engine with `text` typed in one character at a time.
pub fn typed(text: &str) -> ExpressionEngine {
    ExpressionEngine::with_expression(text)
}

/// Create an engine after a sequence of keyboard key names.
///
/// Unknown keys are skipped, as the UI layer would.
pub fn engine_after_keys(keys: &[&str]) -> ExpressionEngine {
    let mut engine = ExpressionEngine::new();
    for action in keys.iter().filter_map(|k| Action::from_key(k)) {
        engine.apply(action);
    }
    engine
}

