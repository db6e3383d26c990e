// Crate root library declaration and module exports.
pub mod client;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod store;

pub use client::{ExtractError, GeminiClient, TranscriptExtractor};
pub use config::Config;
pub use controller::Orchestrator;
pub use model::{DateFormats, DateResolver, Priority, StoredTask, TaskDraft, TaskStatus};
pub use store::{MemoryStore, TaskStore};
