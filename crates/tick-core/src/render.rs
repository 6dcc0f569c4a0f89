use std::io::{self, IsTerminal, Write};

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::task::{Priority, Task};

/// Render palette. Held as plain application state and handed to the
/// renderer; nothing global, nothing persisted, so every invocation
/// starts from whatever the config and flags say.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_config(value: &str) -> anyhow::Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow!("invalid theme setting: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    theme: Theme,
}

impl Renderer {
    pub fn new(cfg: &Config, theme: Theme) -> anyhow::Result<Self> {
        let color_cfg = cfg.get("color").unwrap_or_else(|| "on".to_string());
        let color = match color_cfg.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" | "1" => true,
            "off" | "no" | "false" | "0" => false,
            other => return Err(anyhow!("invalid color setting: {other}")),
        };

        Ok(Self { color, theme })
    }

    #[tracing::instrument(skip(self, tasks, now))]
    pub fn print_task_table(&mut self, tasks: &[Task], now: DateTime<Utc>) -> anyhow::Result<()> {
        let out = io::stdout().lock();
        self.render_task_table(out, tasks, now)
    }

    pub fn render_task_table<W: Write>(
        &self,
        mut out: W,
        tasks: &[Task],
        now: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        if tasks.is_empty() {
            writeln!(out, "No tasks. Add one to get started!")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Pri".to_string(),
            "Age".to_string(),
            "Description".to_string(),
        ];

        let mut rows = Vec::with_capacity(tasks.len());
        for (idx, task) in tasks.iter().enumerate() {
            let id = (idx + 1).to_string();
            let pri = self.paint(task.priority.label(), priority_code(task.priority, self.theme));
            let age = format_age(task.entry, now);
            rows.push(vec![id, pri, age, task.text.clone()]);
        }

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color || !io::stdout().is_terminal() {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn priority_code(priority: Priority, theme: Theme) -> &'static str {
    match (priority, theme) {
        (Priority::High, Theme::Light) => "31",
        (Priority::Medium, Theme::Light) => "33",
        (Priority::Low, Theme::Light) => "32",
        (Priority::High, Theme::Dark) => "91",
        (Priority::Medium, Theme::Dark) => "93",
        (Priority::Low, Theme::Dark) => "92",
    }
}

fn format_age(entry: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(entry);
    let secs = elapsed.num_seconds().max(0);

    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3600)
    } else if secs < 7 * 86_400 {
        format!("{}d", secs / 86_400)
    } else {
        format!("{}w", secs / (7 * 86_400))
    }
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for idx in 0..column_count {
        write!(writer, "{:width$} ", headers[idx], width = widths[idx])?;
    }
    writeln!(writer)?;

    for idx in 0..column_count {
        write!(writer, "{:-<width$} ", "", width = widths[idx])?;
    }
    writeln!(writer)?;

    for row in rows {
        for idx in 0..column_count {
            let cell = &row[idx];
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = widths[idx].saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
