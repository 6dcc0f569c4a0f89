use chrono::Utc;
use tempfile::tempdir;
use tick_core::datastore::DataStore;
use tick_core::task::{Priority, Task};

#[test]
fn fresh_store_loads_empty() {
    let temp = tempdir().expect("tempdir");
    let store = DataStore::open(temp.path()).expect("open datastore");

    assert!(store.load().expect("load").is_empty());
}

#[test]
fn saved_sequence_round_trips_exactly() {
    let temp = tempdir().expect("tempdir");
    let store = DataStore::open(temp.path()).expect("open datastore");

    let now = Utc::now();
    let tasks = vec![
        Task::new("Buy milk".to_string(), Priority::High, now),
        Task::new("Walk dog".to_string(), Priority::Medium, now),
    ];

    store.save(&tasks).expect("save");
    let loaded = store.load().expect("load");

    assert_eq!(loaded.len(), tasks.len());
    for (saved, loaded) in tasks.iter().zip(&loaded) {
        assert_eq!(loaded.uuid, saved.uuid);
        assert_eq!(loaded.text, saved.text);
        assert_eq!(loaded.priority, saved.priority);
        assert_eq!(loaded.entry, saved.entry);
        assert_eq!(loaded.modified, saved.modified);
    }
}

#[test]
fn reopening_the_store_reproduces_the_sequence() {
    let temp = tempdir().expect("tempdir");
    let now = Utc::now();

    {
        let store = DataStore::open(temp.path()).expect("open datastore");
        let tasks = vec![Task::new("Persist me".to_string(), Priority::Low, now)];
        store.save(&tasks).expect("save");
    }

    let store = DataStore::open(temp.path()).expect("reopen datastore");
    let loaded = store.load().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, "Persist me");
    assert_eq!(loaded[0].priority, Priority::Low);
}

#[test]
fn corrupt_store_surfaces_a_load_error() {
    let temp = tempdir().expect("tempdir");
    let store = DataStore::open(temp.path()).expect("open datastore");

    std::fs::write(&store.tasks_path, "{ not json").expect("write corrupt blob");

    let err = store.load().expect_err("load should fail");
    assert!(err.to_string().contains("failed parsing"));
}

#[test]
fn save_overwrites_wholesale() {
    let temp = tempdir().expect("tempdir");
    let store = DataStore::open(temp.path()).expect("open datastore");

    let now = Utc::now();
    store
        .save(&[Task::new("first".to_string(), Priority::Medium, now)])
        .expect("save first");
    store
        .save(&[Task::new("second".to_string(), Priority::Medium, now)])
        .expect("save second");

    let loaded = store.load().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, "second");
}
