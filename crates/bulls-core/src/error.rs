//! Unified error type exposed by **`bulls-core`**.
//!
//! Backend crates convert their transport errors into [`BullsError::Backend`]
//! before handing them to core code. The resolver never fails; only response
//! classification and video enrichment produce these errors.

use thiserror::Error;

use crate::artifact::VideoKind;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BullsError>;

#[derive(Debug, Error)]
pub enum BullsError {
    /// A response started with the legacy `VIDEO_RESPONSE_TYPE=` marker but
    /// its header could not be parsed. Indicates a backend protocol mismatch.
    #[error("malformed video header ({reason}): `{header}`")]
    MalformedHeader { reason: String, header: String },

    /// The provider reported that image generation failed.
    #[error("image generation failed: {0}")]
    GenerationFailed(String),

    /// Fetching the embed markup for a legacy video reference failed.
    #[error("could not fetch video embed: {0}")]
    EmbedFetch(String),

    /// Only `embedded` legacy videos can be materialized into a player.
    #[error("video of kind `{0}` has no embeddable player")]
    EnrichmentNotApplicable(VideoKind),

    /// Failure while serialising or deserialising JSON payloads.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid: {0}")]
    Invalid(String),
}

impl BullsError {
    /// Text the display layer shows in place of a response.
    pub fn display_text(&self) -> String {
        match self {
            BullsError::MalformedHeader { reason, .. } => {
                format!("Could not read the video response from the server: {reason}.")
            }
            BullsError::GenerationFailed(message) => {
                format!("Failed to generate image: {message}")
            }
            BullsError::EmbedFetch(message) => format!("Error embedding video: {message}"),
            other => format!("Error: {other}"),
        }
    }
}
