// File: src/model/item.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use uuid::Uuid;

fn default_id() -> String {
    Uuid::new_v4().to_string()
}

/// Task urgency. `P1` is most urgent; `P3` is the default applied whenever
/// extraction did not supply a value.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Priority {
    P1,
    P2,
    #[default]
    P3,
    P4,
}

impl Priority {
    /// Maps a free-text priority keyword to its canonical level.
    /// Literal `P1`..`P4` tokens pass through unchanged.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "urgent" | "asap" | "high" => Some(Priority::P1),
            "important" | "medium" => Some(Priority::P2),
            "low" => Some(Priority::P4),
            other => Priority::from_str(other).ok(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// An in-flight, not-yet-persisted task record produced by extraction.
///
/// Every field is optional at this stage; the orchestrator guarantees that
/// `priority` and `status` are filled (and `title` derived from
/// `description`) before the draft crosses the store boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A finished record as the store collaborator holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTask {
    #[serde(default = "default_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl StoredTask {
    /// A blank record stamped with `now`; fields arrive via the draft merge.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            id: default_id(),
            title: String::new(),
            description: None,
            assignee: None,
            due_date: None,
            priority: Priority::default(),
            status: TaskStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
