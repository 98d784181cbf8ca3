use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::calculator::ExpressionEngine;
use crate::config::{self, AppConfig};
use crate::input::render_keypad;

#[derive(Parser)]
#[command(name = "zcalc")]
#[command(about = "A keypad-style arithmetic calculator")]
pub struct Cli {
    /// Fractional digits kept in results (overrides the config file)
    #[arg(long, global = true)]
    pub precision: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an expression once and print the result
    Eval {
        /// The expression; multiple arguments are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
        /// Print a JSON report instead of the display text
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive session (the default)
    Repl,
    /// Print the keypad layout
    Keypad,
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

/// Outcome of a one-shot evaluation, for `--json`.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub expression: String,
    pub display: String,
    pub value: Option<f64>,
    pub error: Option<String>,
}

/// Evaluate a single expression the way the keypad would.
pub fn eval_once(expression: &str, precision: u32) -> EvalReport {
    let mut engine = ExpressionEngine::with_precision(precision);
    engine.type_text(expression);
    let outcome = engine.evaluate();

    EvalReport {
        expression: expression.to_string(),
        display: engine.display_text().to_string(),
        value: outcome.as_ref().ok().copied().flatten(),
        error: outcome.err().map(|e| e.to_string()),
    }
}

/// Handle a one-shot command.
pub fn handle_command(cmd: Commands, config: &AppConfig) -> Result<()> {
    match cmd {
        Commands::Eval { expression, json } => {
            let report = eval_once(&expression.join(" "), config.precision);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.display);
            }
            if let Some(error) = report.error {
                anyhow::bail!(error);
            }
        }
        Commands::Keypad => print!("{}", render_keypad()),
        Commands::Config { save } => {
            print!("{}", config::to_toml(config)?);
            if save {
                let path = config::save_config(config)?;
                eprintln!("Saved to {}", path.display());
            }
        }
        Commands::Repl => crate::session::run_interactive(config)?,
    }
    Ok(())
}
