//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::calculator::DEFAULT_PRECISION;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fractional digits kept when a result settles.
    pub precision: u32,
    /// Prompt printed by the interactive session.
    pub prompt: String,
    /// Print the expression before its result in the interactive session.
    pub echo_expression: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            prompt: "> ".to_string(),
            echo_expression: false,
        }
    }
}
