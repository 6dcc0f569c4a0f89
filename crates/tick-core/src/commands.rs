use anyhow::anyhow;
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::cli::Command;
use crate::config::Config;
use crate::confirm::{Decision, Prompt};
use crate::datastore::DataStore;
use crate::render::Renderer;
use crate::task::Priority;

#[instrument(skip(store, cfg, renderer, prompt, command))]
pub fn dispatch(
    store: &mut DataStore,
    cfg: &Config,
    renderer: &mut Renderer,
    prompt: &mut dyn Prompt,
    command: Option<Command>,
) -> anyhow::Result<()> {
    let command = match command {
        Some(command) => command,
        None => default_command(cfg)?,
    };

    debug!(?command, "dispatching command");

    match command {
        Command::Add { words, priority } => cmd_add(store, &words, priority),
        Command::Edit {
            position,
            words,
            priority,
        } => cmd_edit(store, position, &words, priority),
        Command::Delete { position, yes } => cmd_delete(store, prompt, position, yes),
        Command::List => cmd_list(store, renderer),
        Command::Config => cmd_config(cfg),
    }
}

fn default_command(cfg: &Config) -> anyhow::Result<Command> {
    let name = cfg
        .get("default.command")
        .unwrap_or_else(|| "list".to_string());
    match name.as_str() {
        "list" => Ok(Command::List),
        "config" => Ok(Command::Config),
        other => Err(anyhow!("unsupported default.command: {other}")),
    }
}

#[instrument(skip(store, words))]
fn cmd_add(store: &mut DataStore, words: &[String], priority: Priority) -> anyhow::Result<()> {
    info!("command add");
    let now = Utc::now();

    let mut board = Board::new(store.load()?);
    board.set_draft_text(words.join(" "));
    board.set_draft_priority(priority);

    let uuid = board.submit(now)?;
    store.save(board.tasks())?;

    let position = board
        .position_of(uuid)
        .ok_or_else(|| anyhow!("created task vanished: {uuid}"))?;
    debug!(count = board.len(), "task added");
    println!("Created task {position}.");
    Ok(())
}

#[instrument(skip(store, words))]
fn cmd_edit(
    store: &mut DataStore,
    position: usize,
    words: &[String],
    priority: Option<Priority>,
) -> anyhow::Result<()> {
    info!("command edit");
    let now = Utc::now();

    let mut board = Board::new(store.load()?);
    let uuid = board.resolve_position(position)?;

    board.begin_edit(uuid)?;
    if !words.is_empty() {
        board.set_draft_text(words.join(" "));
    }
    if let Some(priority) = priority {
        board.set_draft_priority(priority);
    }

    board.submit(now)?;
    store.save(board.tasks())?;

    println!("Updated task {position}.");
    Ok(())
}

#[instrument(skip(store, prompt))]
fn cmd_delete(
    store: &mut DataStore,
    prompt: &mut dyn Prompt,
    position: usize,
    yes: bool,
) -> anyhow::Result<()> {
    info!("command delete");

    let mut board = Board::new(store.load()?);
    let uuid = board.resolve_position(position)?;
    let text = board
        .get(uuid)
        .map(|task| task.text.clone())
        .unwrap_or_default();

    let decision = if yes {
        Decision::Confirmed
    } else {
        prompt.ask(&format!("Permanently delete task {position} '{text}'?"))?
    };

    match decision {
        Decision::Confirmed => {
            board.remove(uuid)?;
            store.save(board.tasks())?;
            println!("Deleted task {position}.");
        }
        Decision::Cancelled => {
            debug!("delete cancelled, board untouched");
            println!("Deletion cancelled.");
        }
    }

    Ok(())
}

#[instrument(skip(store, renderer))]
fn cmd_list(store: &mut DataStore, renderer: &mut Renderer) -> anyhow::Result<()> {
    info!("command list");
    let now = Utc::now();

    let board = Board::new(store.load()?);
    renderer.print_task_table(board.tasks(), now)?;
    Ok(())
}

#[instrument(skip(cfg))]
fn cmd_config(cfg: &Config) -> anyhow::Result<()> {
    info!("command config");

    let mut entries: Vec<(&String, &String)> = cfg.iter().collect();
    entries.sort();
    for (key, value) in entries {
        println!("{key}={value}");
    }
    Ok(())
}
