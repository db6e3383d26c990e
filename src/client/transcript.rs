// File: src/client/transcript.rs
//! Transcript-to-draft extraction over the generative service.

use crate::client::sanitize;
use crate::client::{ExtractError, GeminiClient};
use crate::model::dates::DateResolver;
use crate::model::item::{Priority, TaskDraft, TaskStatus};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use std::str::FromStr;

/// Instruction block sent ahead of the transcript. Demands a bare JSON array
/// so the sanitizer has a fighting chance even when the model decorates it.
const EXTRACTION_PROMPT: &str = r#"Extract tasks from the following meeting transcript in JSON format.
For each task, include: title, description, assignee, and dueDate.
Set default priority to P3 if not specified.
Format dates as "YYYY-MM-DD HH:MM" or relative terms like "tonight", "tomorrow", "next week".

Example output format:
[
  {
    "title": "Complete the landing page",
    "description": "Finish the landing page with responsive design",
    "assignee": "Aman",
    "dueDate": "2023-12-01 18:00",
    "priority": "P3"
  }
]

Transcript: "#;

/// One element of the model's reply array, before resolution. Untrusted;
/// every field is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCandidate {
    title: Option<String>,
    description: Option<String>,
    assignee: Option<String>,
    due_date: Option<String>,
    priority: Option<String>,
}

/// Extracts task drafts from a meeting transcript: one service call, then
/// sanitize, parse, and resolve each candidate. Stateless; the reference
/// clock is captured once per call and threaded through date resolution.
#[derive(Debug, Clone)]
pub struct TranscriptExtractor {
    client: GeminiClient,
    resolver: DateResolver,
}

impl TranscriptExtractor {
    pub fn new(client: GeminiClient, resolver: DateResolver) -> Self {
        Self { client, resolver }
    }

    pub async fn extract(&self, transcript: &str) -> Result<Vec<TaskDraft>, ExtractError> {
        self.extract_at(transcript, Local::now().naive_local())
            .await
    }

    /// As [`Self::extract`], with an explicit reference clock.
    pub async fn extract_at(
        &self,
        transcript: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<TaskDraft>, ExtractError> {
        let prompt = format!("{EXTRACTION_PROMPT}{transcript}");
        let reply = self.client.generate(&prompt).await?;

        let cleaned = sanitize::sanitize_reply(&reply);
        let raw: Vec<RawCandidate> =
            serde_json::from_str(&cleaned).map_err(|source| ExtractError::MalformedReply {
                text: cleaned.clone(),
                source,
            })?;

        log::debug!("transcript reply parsed into {} candidate(s)", raw.len());
        Ok(raw
            .into_iter()
            .map(|candidate| self.to_draft(candidate, now))
            .collect())
    }

    fn to_draft(&self, raw: RawCandidate, now: NaiveDateTime) -> TaskDraft {
        let due_date = raw
            .due_date
            .as_deref()
            .and_then(|phrase| self.resolver.resolve(phrase, now));
        // absent or unrecognized priority falls back to P3
        let priority = raw
            .priority
            .as_deref()
            .and_then(|p| Priority::from_str(p.trim()).ok())
            .unwrap_or_default();

        TaskDraft {
            title: raw.title,
            description: raw.description,
            assignee: raw.assignee,
            due_date,
            priority: Some(priority),
            status: Some(TaskStatus::Pending),
        }
    }
}
