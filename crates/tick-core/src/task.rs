use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub uuid: Uuid,

    pub text: String,

    #[serde(default)]
    pub priority: Priority,

    pub entry: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

impl Task {
    pub fn new(text: String, priority: Priority, now: DateTime<Utc>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            text,
            priority,
            entry: now,
            modified: now,
        }
    }
}
