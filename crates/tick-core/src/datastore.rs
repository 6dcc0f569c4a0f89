use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::task::Task;

/// Durable home of the task list: one JSON array in `tasks.json`, read
/// once at startup and overwritten wholesale after every mutation.
#[derive(Debug)]
pub struct DataStore {
    pub data_dir: PathBuf,
    pub tasks_path: PathBuf,
}

impl DataStore {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
        let data_dir = data_dir.to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;

        let tasks_path = data_dir.join("tasks.json");

        info!(
            data_dir = %data_dir.display(),
            tasks = %tasks_path.display(),
            "opened datastore"
        );

        Ok(Self {
            data_dir,
            tasks_path,
        })
    }

    /// Loads the full sequence. A store that has never been written
    /// yields an empty list; content that no longer parses is surfaced
    /// as an error rather than silently discarded.
    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> anyhow::Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            debug!(file = %self.tasks_path.display(), "no task file yet, starting empty");
            return Ok(vec![]);
        }

        let raw = fs::read_to_string(&self.tasks_path)
            .with_context(|| format!("failed reading {}", self.tasks_path.display()))?;

        let tasks: Vec<Task> = serde_json::from_str(&raw)
            .with_context(|| format!("failed parsing {}", self.tasks_path.display()))?;

        debug!(count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Replaces the stored sequence. Written to a temp file in the data
    /// directory first so a crash mid-write cannot corrupt the store.
    #[tracing::instrument(skip(self, tasks))]
    pub fn save(&self, tasks: &[Task]) -> anyhow::Result<()> {
        debug!(file = %self.tasks_path.display(), count = tasks.len(), "saving tasks");

        let mut temp = NamedTempFile::new_in(&self.data_dir)?;
        let serialized = serde_json::to_string_pretty(tasks)?;
        temp.write_all(serialized.as_bytes())?;
        writeln!(temp)?;
        temp.flush()?;

        temp.persist(&self.tasks_path)
            .map_err(|err| anyhow!("failed to persist {}: {}", self.tasks_path.display(), err))?;

        Ok(())
    }
}
