// File: src/client/mod.rs
pub mod gemini;
pub mod sanitize;
pub mod transcript;

pub use gemini::GeminiClient;
pub use transcript::TranscriptExtractor;

use thiserror::Error;

/// Unified failure type for the transcript path. Local extraction never
/// fails; only the network-dependent path can, and always with one of these
/// kinds.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The generative service returned a non-success status, timed out, or
    /// the transport itself failed. Never retried internally.
    #[error("generative service error: {0}")]
    Service(String),

    /// The reply could not be coerced into a JSON task array even after
    /// sanitization. Carries the sanitized text for diagnosis.
    #[error("malformed model reply: {source}")]
    MalformedReply {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    /// Anything else that went wrong inside the transcript path.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
