use anyhow::anyhow;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::task::{Priority, Task};

/// Staged input for the next submit: task text plus a priority
/// that defaults to medium.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub text: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

/// The task list state machine. Two modes: Create (no edit cursor) and
/// Edit (cursor set to an existing task). `submit` is the single
/// add-or-save path; it never touches the list on empty draft text.
///
/// The board is pure in-memory state. Persistence of the sequence after
/// a mutation is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tasks: Vec<Task>,
    draft: Draft,
    cursor: Option<Uuid>,
}

impl Board {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            draft: Draft::default(),
            cursor: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn mode(&self) -> Mode {
        if self.cursor.is_some() {
            Mode::Edit
        } else {
            Mode::Create
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Resolves a 1-based display position to the stable task identity.
    pub fn resolve_position(&self, position: usize) -> anyhow::Result<Uuid> {
        let idx = position
            .checked_sub(1)
            .ok_or_else(|| anyhow!("positions start at 1"))?;
        self.tasks
            .get(idx)
            .map(|task| task.uuid)
            .ok_or_else(|| anyhow!("no task at position {position}"))
    }

    /// 1-based display position of a task, if it is on the board.
    pub fn position_of(&self, uuid: Uuid) -> Option<usize> {
        self.tasks.iter().position(|task| task.uuid == uuid).map(|idx| idx + 1)
    }

    pub fn get(&self, uuid: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.uuid == uuid)
    }

    /// Copies the target task's text and priority into the draft and
    /// enters Edit mode.
    #[instrument(skip(self), fields(uuid = %uuid))]
    pub fn begin_edit(&mut self, uuid: Uuid) -> anyhow::Result<()> {
        let task = self
            .tasks
            .iter()
            .find(|task| task.uuid == uuid)
            .ok_or_else(|| anyhow!("no such task: {uuid}"))?;

        self.draft = Draft {
            text: task.text.clone(),
            priority: task.priority,
        };
        self.cursor = Some(uuid);

        debug!(text = %self.draft.text, priority = %self.draft.priority, "staged edit");
        Ok(())
    }

    /// Applies the draft: appends a new task in Create mode, overwrites
    /// the cursor task in Edit mode. Empty or whitespace-only draft text
    /// is rejected before any mutation; the cursor and list are left as
    /// they were. On success the draft resets and the board returns to
    /// Create mode. Returns the identity of the affected task.
    #[instrument(skip(self, now))]
    pub fn submit(&mut self, now: DateTime<Utc>) -> anyhow::Result<Uuid> {
        let text = self.draft.text.trim();
        if text.is_empty() {
            return Err(anyhow!("task text cannot be empty"));
        }
        let text = text.to_string();
        let priority = self.draft.priority;

        let uuid = match self.cursor {
            Some(uuid) => {
                let task = self
                    .tasks
                    .iter_mut()
                    .find(|task| task.uuid == uuid)
                    .ok_or_else(|| anyhow!("edited task vanished: {uuid}"))?;
                task.text = text;
                task.priority = priority;
                task.modified = now;
                debug!(%uuid, "saved edit");
                uuid
            }
            None => {
                let task = Task::new(text, priority, now);
                let uuid = task.uuid;
                self.tasks.push(task);
                debug!(%uuid, count = self.tasks.len(), "appended task");
                uuid
            }
        };

        self.cursor = None;
        self.draft = Draft::default();
        Ok(uuid)
    }

    /// Removes a task, preserving the order of the rest. Callers are
    /// expected to have collected an explicit confirmation first.
    #[instrument(skip(self), fields(uuid = %uuid))]
    pub fn remove(&mut self, uuid: Uuid) -> anyhow::Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|task| task.uuid == uuid)
            .ok_or_else(|| anyhow!("no such task: {uuid}"))?;

        let task = self.tasks.remove(idx);
        debug!(count = self.tasks.len(), "removed task");
        Ok(task)
    }
}
