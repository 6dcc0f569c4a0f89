use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// Two-step confirmation: a command states its intent, waits for the
/// decision, and applies the mutation only on `Confirmed`. Nothing on
/// the board may change while a prompt is outstanding.
pub trait Prompt {
    fn ask(&mut self, message: &str) -> anyhow::Result<Decision>;
}

/// Interactive prompt on stdin. `y` / `yes` (any case) confirms,
/// anything else cancels.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> anyhow::Result<Decision> {
        print!("{message} [y/N] ");
        io::stdout().flush().context("failed flushing stdout")?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed reading confirmation from stdin")?;

        let answer = line.trim().to_ascii_lowercase();
        let decision = if answer == "y" || answer == "yes" {
            Decision::Confirmed
        } else {
            Decision::Cancelled
        };

        debug!(answer = %answer, ?decision, "prompt answered");
        Ok(decision)
    }
}

/// Prompt that answers without asking. Backs the `--yes` flag and the
/// test suites.
#[derive(Debug, Clone, Copy)]
pub struct PresetPrompt(pub Decision);

impl Prompt for PresetPrompt {
    fn ask(&mut self, _message: &str) -> anyhow::Result<Decision> {
        Ok(self.0)
    }
}
