// File: src/controller.rs
//! Central orchestrator for task extraction.
//!
//! The two public entry points - one task from a sentence, N tasks from a
//! transcript - share the same tail: apply field defaults, then hand each
//! finished draft to the store collaborator. Embedding layers (CLI, HTTP,
//! whatever) delegate here so both paths stay consistent.

use crate::client::{ExtractError, TranscriptExtractor};
use crate::config::Config;
use crate::model::item::{Priority, StoredTask, TaskDraft, TaskStatus};
use crate::model::{DateResolver, merge, parser};
use crate::store::TaskStore;
use chrono::{Local, NaiveDateTime};

pub struct Orchestrator<S: TaskStore> {
    resolver: DateResolver,
    transcripts: TranscriptExtractor,
    store: S,
}

impl<S: TaskStore> Orchestrator<S> {
    pub fn new(config: &Config, store: S) -> Self {
        let resolver = DateResolver::default();
        let client = crate::client::GeminiClient::from_config(config);
        let transcripts = TranscriptExtractor::new(client, resolver.clone());
        Self {
            resolver,
            transcripts,
            store,
        }
    }

    /// Assembles an orchestrator from pre-built parts (tests point the
    /// transcript extractor at a mock service this way).
    pub fn with_parts(resolver: DateResolver, transcripts: TranscriptExtractor, store: S) -> Self {
        Self {
            resolver,
            transcripts,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Extracts one task from a free-form sentence and persists it.
    /// Local-only; never fails.
    pub fn from_sentence(&mut self, text: &str) -> StoredTask {
        self.from_sentence_at(text, Local::now().naive_local())
    }

    /// As [`Self::from_sentence`], with an explicit reference clock.
    pub fn from_sentence_at(&mut self, text: &str, now: NaiveDateTime) -> StoredTask {
        let parsed = parser::extract(text, now, &self.resolver);
        let mut draft = TaskDraft {
            description: Some(parsed.description),
            assignee: parsed.assignee,
            due_date: parsed.due,
            priority: parsed.priority,
            ..TaskDraft::default()
        };
        apply_defaults(&mut draft);
        self.store.create(draft)
    }

    /// Extracts every action item from a meeting transcript and persists
    /// them, preserving the service's ordering.
    pub async fn from_transcript(&mut self, text: &str) -> Result<Vec<StoredTask>, ExtractError> {
        self.from_transcript_at(text, Local::now().naive_local())
            .await
    }

    /// As [`Self::from_transcript`], with an explicit reference clock.
    pub async fn from_transcript_at(
        &mut self,
        text: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<StoredTask>, ExtractError> {
        let drafts = self.transcripts.extract_at(text, now).await?;
        log::info!("transcript yielded {} draft(s)", drafts.len());

        let mut created = Vec::with_capacity(drafts.len());
        for mut draft in drafts {
            apply_defaults(&mut draft);
            created.push(self.store.create(draft));
        }
        Ok(created)
    }

    /// Companion modify path: merges a draft into an existing record via the
    /// store, with the same field semantics as creation (including the
    /// absent-priority-resets-to-P3 asymmetry).
    pub fn update_task(&mut self, id: &str, draft: TaskDraft) -> Option<StoredTask> {
        self.store.update(id, draft)
    }
}

/// Fills the invariant fields extraction may have left unset: priority P3,
/// status PENDING, and a title derived from the description. An explicit
/// title is never overwritten.
pub fn apply_defaults(draft: &mut TaskDraft) {
    if draft.priority.is_none() {
        draft.priority = Some(Priority::default());
    }
    if draft.status.is_none() {
        draft.status = Some(TaskStatus::default());
    }
    if draft.title.is_none() {
        draft.title = merge::derive_title(draft.description.as_deref());
    }
}
