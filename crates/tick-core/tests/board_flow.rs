use chrono::Utc;
use tick_core::board::{Board, Mode};
use tick_core::task::Priority;

#[test]
fn create_submit_appends_exactly_one_task() {
    let now = Utc::now();
    let mut board = Board::default();

    board.set_draft_text("Buy milk");
    board.set_draft_priority(Priority::High);
    board.submit(now).expect("submit should succeed");

    assert_eq!(board.len(), 1);
    assert_eq!(board.tasks()[0].text, "Buy milk");
    assert_eq!(board.tasks()[0].priority, Priority::High);
    assert_eq!(board.mode(), Mode::Create);
}

#[test]
fn empty_submit_never_mutates_the_board() {
    let now = Utc::now();
    let mut board = Board::default();

    assert!(board.submit(now).is_err());
    assert_eq!(board.len(), 0);

    board.set_draft_text("   \t ");
    assert!(board.submit(now).is_err());
    assert_eq!(board.len(), 0);
}

#[test]
fn empty_submit_in_edit_mode_keeps_the_cursor() {
    let now = Utc::now();
    let mut board = Board::default();

    board.set_draft_text("Walk dog");
    let uuid = board.submit(now).expect("submit should succeed");

    board.begin_edit(uuid).expect("begin_edit should succeed");
    board.set_draft_text("");
    assert!(board.submit(now).is_err());

    assert_eq!(board.len(), 1);
    assert_eq!(board.tasks()[0].text, "Walk dog");
    assert_eq!(board.mode(), Mode::Edit);
}

#[test]
fn begin_edit_stages_the_target_fields() {
    let now = Utc::now();
    let mut board = Board::default();

    board.set_draft_text("Buy milk");
    board.set_draft_priority(Priority::High);
    let uuid = board.submit(now).expect("submit should succeed");

    board.begin_edit(uuid).expect("begin_edit should succeed");
    assert_eq!(board.mode(), Mode::Edit);
    assert_eq!(board.draft().text, "Buy milk");
    assert_eq!(board.draft().priority, Priority::High);
}

#[test]
fn edit_submit_replaces_only_the_target() {
    let now = Utc::now();
    let mut board = Board::default();

    board.set_draft_text("Buy milk");
    board.set_draft_priority(Priority::High);
    let first = board.submit(now).expect("submit should succeed");

    board.set_draft_text("Walk dog");
    board.submit(now).expect("submit should succeed");

    let entry_before = board.tasks()[0].entry;

    board.begin_edit(first).expect("begin_edit should succeed");
    board.set_draft_text("Buy milk and eggs");
    board.set_draft_priority(Priority::Low);
    let saved = board.submit(now).expect("submit should succeed");

    assert_eq!(saved, first);
    assert_eq!(board.len(), 2);
    assert_eq!(board.tasks()[0].text, "Buy milk and eggs");
    assert_eq!(board.tasks()[0].priority, Priority::Low);
    assert_eq!(board.tasks()[0].uuid, first);
    assert_eq!(board.tasks()[0].entry, entry_before);
    assert_eq!(board.tasks()[1].text, "Walk dog");
    assert_eq!(board.mode(), Mode::Create);
}

#[test]
fn remove_shifts_later_positions_down() {
    let now = Utc::now();
    let mut board = Board::default();

    for text in ["one", "two", "three"] {
        board.set_draft_text(text);
        board.submit(now).expect("submit should succeed");
    }

    let first = board.resolve_position(1).expect("resolve position 1");
    board.remove(first).expect("remove should succeed");

    assert_eq!(board.len(), 2);
    assert_eq!(board.tasks()[0].text, "two");
    assert_eq!(
        board.resolve_position(1).expect("resolve position 1"),
        board.tasks()[0].uuid
    );
}

#[test]
fn resolve_position_rejects_zero_and_out_of_range() {
    let board = Board::default();
    assert!(board.resolve_position(0).is_err());
    assert!(board.resolve_position(1).is_err());
}

#[test]
fn spec_scenario_end_to_end() {
    let now = Utc::now();
    let mut board = Board::default();

    board.set_draft_text("Buy milk");
    board.set_draft_priority(Priority::High);
    board.submit(now).expect("add Buy milk");
    assert_eq!(board.len(), 1);

    let first = board.resolve_position(1).expect("resolve position 1");
    board.begin_edit(first).expect("begin_edit");
    board.set_draft_text("Buy milk and eggs");
    board.set_draft_priority(Priority::Low);
    board.submit(now).expect("save edit");
    assert_eq!(board.len(), 1);
    assert_eq!(board.tasks()[0].text, "Buy milk and eggs");
    assert_eq!(board.tasks()[0].priority, Priority::Low);

    board.set_draft_text("Walk dog");
    board.set_draft_priority(Priority::Medium);
    board.submit(now).expect("add Walk dog");
    assert_eq!(board.len(), 2);

    let first = board.resolve_position(1).expect("resolve position 1");
    board.remove(first).expect("confirmed delete");

    assert_eq!(board.len(), 1);
    assert_eq!(board.tasks()[0].text, "Walk dog");
    assert_eq!(board.tasks()[0].priority, Priority::Medium);
}
