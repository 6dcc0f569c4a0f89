use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::Theme;
use crate::task::Priority;

#[derive(Debug, Clone)]
pub struct PreprocessedArgs {
    pub cleaned_args: Vec<OsString>,
    pub rc_overrides: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct KeyVal {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for KeyVal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (k, v) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, got: {s}"))?;
        Ok(Self {
            key: k.trim().to_string(),
            value: v.trim().to_string(),
        })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tick",
    version,
    about = "tick: a priority to-do list for the command line",
    disable_help_subcommand = true,
    arg_required_else_help = false
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    #[arg(
        long = "rc",
        value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<KeyVal>()),
        action = ArgAction::Append
    )]
    pub rc_overrides: Vec<KeyVal>,

    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    #[arg(long = "data")]
    pub data: Option<PathBuf>,

    /// Render palette for this invocation; never persisted.
    #[arg(long = "theme", value_enum)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a task to the board
    Add {
        /// Task text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        #[arg(short = 'p', long = "priority", value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// Rewrite an existing task's text and/or priority
    Edit {
        /// 1-based position as shown by `tick list`
        position: usize,

        /// Replacement text; omitted fields keep their current value
        #[arg(num_args = 0..)]
        words: Vec<String>,

        #[arg(short = 'p', long = "priority", value_enum)]
        priority: Option<Priority>,
    },

    /// Delete a task after confirmation
    Delete {
        /// 1-based position as shown by `tick list`
        position: usize,

        /// Skip confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Show the board
    List,

    /// Dump the effective configuration
    Config,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

/// Pulls taskwarrior-style positional `rc.key=value` / `rc.key:value`
/// overrides out of the raw arguments before clap sees them.
#[tracing::instrument(skip_all)]
pub fn preprocess_args(raw: &[OsString]) -> anyhow::Result<PreprocessedArgs> {
    let mut cleaned = Vec::with_capacity(raw.len());
    let mut overrides: Vec<(String, String)> = Vec::new();

    let mut iter = raw.iter().cloned();
    if let Some(bin) = iter.next() {
        cleaned.push(bin);
    }

    for arg in iter {
        let s = arg.to_string_lossy();
        if let Some(rest) = s.strip_prefix("rc.") {
            let parsed = if let Some((k, v)) = rest.split_once('=') {
                Some((format!("rc.{k}"), v.to_string()))
            } else if let Some((k, v)) = rest.split_once(':') {
                Some((format!("rc.{k}"), v.to_string()))
            } else {
                None
            };

            if let Some((k, v)) = parsed {
                debug!(key = %k, value = %v, "captured positional rc override");
                overrides.push((k, v));
                continue;
            }
        }

        cleaned.push(arg);
    }

    Ok(PreprocessedArgs {
        cleaned_args: cleaned,
        rc_overrides: overrides,
    })
}
