use std::fs;

use chrono::Utc;
use tempfile::tempdir;
use tick_core::config::Config;
use tick_core::render::{Renderer, Theme};
use tick_core::task::{Priority, Task};

fn plain_renderer() -> Renderer {
    let temp = tempdir().expect("tempdir");
    let rc = temp.path().join("tickrc");
    fs::write(&rc, "color = off\n").expect("write rc");

    let cfg = Config::load(Some(&rc)).expect("load config");
    Renderer::new(&cfg, Theme::Light).expect("renderer")
}

#[test]
fn empty_board_renders_the_fixed_message() {
    let renderer = plain_renderer();

    let mut out = Vec::new();
    renderer
        .render_task_table(&mut out, &[], Utc::now())
        .expect("render");

    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text, "No tasks. Add one to get started!\n");
}

#[test]
fn table_lists_positions_labels_and_text_in_order() {
    let now = Utc::now();
    let tasks = vec![
        Task::new("Buy milk".to_string(), Priority::High, now),
        Task::new("Walk dog".to_string(), Priority::Medium, now),
    ];

    let renderer = plain_renderer();
    let mut out = Vec::new();
    renderer
        .render_task_table(&mut out, &tasks, now)
        .expect("render");

    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("ID"));
    assert!(lines[0].contains("Pri"));
    assert!(lines[0].contains("Description"));
    assert!(lines[1].starts_with("--"));

    assert!(lines[2].starts_with("1 "));
    assert!(lines[2].contains("High"));
    assert!(lines[2].contains("Buy milk"));

    assert!(lines[3].starts_with("2 "));
    assert!(lines[3].contains("Medium"));
    assert!(lines[3].contains("Walk dog"));

    // color = off, so no escape codes reach the writer
    assert!(!text.contains('\x1b'));
}
