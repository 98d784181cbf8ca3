//! Interactive terminal session driving an [`ExpressionEngine`].
//!
//! Each input line is a sequence of key presses. Characters map to actions
//! the same way keyboard keys do; keypad glyphs such as `×` act like the
//! matching button. Unknown characters are ignored.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::calculator::ExpressionEngine;
use crate::cli::{Cli, handle_command};
use crate::config::{self, AppConfig};
use crate::input::{Action, button_for_label};

/// Initialize the tracing subscriber for logging.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // By default, only log warnings from the zcalc crate
    // Users can override with RUST_LOG environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zcalc=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Entry point for the binary.
pub fn run(cli: Cli) -> Result<()> {
    init_logging();
    debug!(version = env!("CARGO_PKG_VERSION"), "Starting zcalc");

    let config = config::init_config(cli.precision);

    match cli.command {
        Some(cmd) => handle_command(cmd, &config),
        None => run_interactive(&config),
    }
}

/// Result of feeding one line to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Show `display`; `evaluated` holds the expression if the line evaluated it.
    Display {
        evaluated: Option<String>,
        display: String,
    },
    /// The user asked to leave.
    Quit,
}

/// An engine plus the line protocol around it.
pub struct Session {
    engine: ExpressionEngine,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine: ExpressionEngine::with_precision(config.precision),
        }
    }

    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Process one input line.
    ///
    /// `:quit`, `:clear` and `:del` are commands; an empty line is Enter.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let mut evaluated = None;

        match line.trim() {
            ":quit" | ":q" => return LineOutcome::Quit,
            ":clear" => self.engine.apply(Action::Clear),
            ":del" => self.engine.apply(Action::DeleteLast),
            "" => evaluated = self.evaluate(),
            keys => {
                for action in keys.chars().filter_map(action_for_char) {
                    if action == Action::Evaluate {
                        evaluated = self.evaluate();
                    } else {
                        self.engine.apply(action);
                    }
                }
            }
        }

        LineOutcome::Display {
            evaluated,
            display: self.engine.display_text().to_string(),
        }
    }

    /// Evaluate and return the expression that was evaluated.
    fn evaluate(&mut self) -> Option<String> {
        let expression = self.engine.buffer().to_string();
        if expression.trim().is_empty() {
            return None;
        }
        self.engine.apply(Action::Evaluate);
        Some(expression)
    }
}

fn action_for_char(c: char) -> Option<Action> {
    Action::from_char(c).or_else(|| {
        let mut buf = [0; 4];
        button_for_label(c.encode_utf8(&mut buf)).map(|b| b.action)
    })
}

/// Run a session over arbitrary reader and writer.
pub fn run_session<R: BufRead, W: Write>(
    config: &AppConfig,
    reader: R,
    mut writer: W,
) -> io::Result<()> {
    let mut session = Session::new(config);

    write!(writer, "{}", config.prompt)?;
    writer.flush()?;

    for line in reader.lines() {
        match session.process_line(&line?) {
            LineOutcome::Quit => break,
            LineOutcome::Display { evaluated, display } => {
                if config.echo_expression
                    && let Some(expression) = evaluated
                {
                    writeln!(writer, "{} =", expression)?;
                }
                writeln!(writer, "{}", display)?;
            }
        }
        write!(writer, "{}", config.prompt)?;
        writer.flush()?;
    }

    Ok(())
}

/// Run a session on stdin and stdout.
pub fn run_interactive(config: &AppConfig) -> Result<()> {
    info!("Interactive session started");
    let stdin = io::stdin();
    run_session(config, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_config;

    fn display(outcome: LineOutcome) -> String {
        match outcome {
            LineOutcome::Display { display, .. } => display,
            LineOutcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_keys_and_enter() {
        let mut session = Session::new(&mock_config());
        assert_eq!(display(session.process_line("2+3*4")), "2+3*4");
        assert_eq!(
            session.process_line(""),
            LineOutcome::Display {
                evaluated: Some("2+3*4".to_string()),
                display: "14".to_string(),
            }
        );
    }

    #[test]
    fn test_equals_in_line() {
        let mut session = Session::new(&mock_config());
        assert_eq!(display(session.process_line("7*6=")), "42");
        assert_eq!(display(session.process_line("+1=")), "43");
    }

    #[test]
    fn test_commands() {
        let mut session = Session::new(&mock_config());
        session.process_line("123");
        assert_eq!(display(session.process_line(":del")), "12");
        assert_eq!(display(session.process_line(":clear")), "0");
        assert_eq!(session.process_line(":quit"), LineOutcome::Quit);
    }

    #[test]
    fn test_keypad_glyphs_and_ignored_chars() {
        let mut session = Session::new(&mock_config());
        assert_eq!(display(session.process_line("6 ÷ 4 abc")), "6/4");
        assert_eq!(display(session.process_line("=")), "1.5");
    }

    #[test]
    fn test_error_then_recover() {
        let mut session = Session::new(&mock_config());
        assert_eq!(display(session.process_line("(2=")), "Error");
        assert_eq!(session.engine().buffer(), "(2");
        assert_eq!(display(session.process_line(")=")), "2");
    }

    #[test]
    fn test_run_session_output() {
        let config = AppConfig {
            prompt: "> ".to_string(),
            echo_expression: true,
            ..mock_config()
        };
        let input = "1+1\n\n:quit\n9\n";
        let mut output = Vec::new();
        run_session(&config, input.as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "> 1+1\n> 1+1 =\n2\n> ");
    }
}
