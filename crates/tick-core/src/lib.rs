pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod datastore;
pub mod render;
pub mod task;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let pre = cli::preprocess_args(&raw_args)?;
    let cli = cli::GlobalCli::parse_from(pre.cleaned_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(verbose = cli.verbose, quiet = cli.quiet, "starting tick CLI");
    debug!(?pre.rc_overrides, "preprocessed rc overrides");

    let mut cfg = config::Config::load(cli.config.as_deref())?;
    cfg.apply_overrides(
        pre.rc_overrides.into_iter().chain(
            cli.rc_overrides
                .into_iter()
                .map(|kv| (kv.key, kv.value)),
        ),
    );
    debug!(config_files = ?cfg.loaded_files, "configuration ready");

    let theme = match cli.theme {
        Some(theme) => theme,
        None => {
            let value = cfg.get("theme").unwrap_or_else(|| "light".to_string());
            render::Theme::from_config(&value)?
        }
    };

    let data_dir = config::resolve_data_dir(&cfg, cli.data.as_deref())
        .context("failed to resolve data directory")?;

    let mut store = datastore::DataStore::open(&data_dir)
        .with_context(|| format!("failed to open datastore at {}", data_dir.display()))?;

    let mut renderer = render::Renderer::new(&cfg, theme)?;
    let mut prompt = confirm::TerminalPrompt;

    commands::dispatch(&mut store, &cfg, &mut renderer, &mut prompt, cli.command)?;

    info!("done");
    Ok(())
}
