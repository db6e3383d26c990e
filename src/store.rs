// File: src/store.rs
//! Store collaborator seam.
//!
//! The extraction core only ever hands finished drafts across this boundary;
//! querying, listing, and durable persistence belong entirely to the
//! implementor. `MemoryStore` is the in-process reference implementation
//! used by tests and embedders that bring their own persistence later.

use crate::model::item::{StoredTask, TaskDraft};
use crate::model::merge;
use chrono::Local;
use std::collections::HashMap;

pub trait TaskStore: Send + Sync {
    /// Persists a finished draft as a new record and returns it.
    fn create(&mut self, draft: TaskDraft) -> StoredTask;

    /// Merges a draft into an existing record. `None` when the id is
    /// unknown. Field semantics live in [`merge::apply_draft`].
    fn update(&mut self, id: &str, draft: TaskDraft) -> Option<StoredTask>;

    fn get(&self, id: &str) -> Option<&StoredTask>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: HashMap<String, StoredTask>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskStore for MemoryStore {
    fn create(&mut self, draft: TaskDraft) -> StoredTask {
        let now = Local::now().naive_local();
        let mut task = StoredTask::new(now);
        merge::apply_draft(&mut task, &draft);
        log::debug!("created task {} ({})", task.id, task.title);
        self.tasks.insert(task.id.clone(), task.clone());
        task
    }

    fn update(&mut self, id: &str, draft: TaskDraft) -> Option<StoredTask> {
        let task = self.tasks.get_mut(id)?;
        merge::apply_draft(task, &draft);
        task.updated_at = Local::now().naive_local();
        log::debug!("updated task {}", task.id);
        Some(task.clone())
    }

    fn get(&self, id: &str) -> Option<&StoredTask> {
        self.tasks.get(id)
    }
}
