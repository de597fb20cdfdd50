//! Collaborator interfaces and the JSON shapes exchanged with the backend.
//!
//! A **backend** performs the network calls the front end needs: a chat
//! round-trip, an image generation, and the embed fetch that upgrades a
//! legacy video reference. Core code never talks HTTP itself; it only sees
//! these traits, which keeps the classifier and enrichment testable against
//! in-memory fakes.

use futures_core::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::{
    artifact::PlayerDimensions,
    error::Result,
    provider::ProviderId,
    resolver::SessionConfig,
};

/// Body of a chat call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f64,
    pub api_provider: ProviderId,
}

impl ChatRequest {
    /// Build a request from the current session. The temperature is the one
    /// the backend must see, i.e. `1.0` for fixed-temperature models.
    pub fn new(prompt: impl Into<String>, config: &SessionConfig) -> Self {
        Self {
            prompt: prompt.into(),
            model: config.model.clone(),
            temperature: config.effective_temperature(),
            api_provider: config.provider,
        }
    }
}

/// Body of an image generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
}

impl ImageRequest {
    pub const DEFAULT_SIDE: u32 = 512;

    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            width: Self::DEFAULT_SIDE,
            height: Self::DEFAULT_SIDE,
            steps: 1,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

/// Parameters of an embed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
    pub video_id: String,
    pub dimensions: PlayerDimensions,
}

/// Reply of the embed endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structured video field on a chat response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVideoEmbed {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub embed_html: Option<String>,
}

/// Opaque backend reply as inspected by [`crate::classify`].
///
/// Chat replies carry `response` and optionally `video_embed`; image replies
/// carry `response`, `success` and, on success, `image`. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub video_embed: Option<RawVideoEmbed>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub image: Option<String>,
}

impl RawResponse {
    /// Parse a JSON body received from the backend.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A backend that answers chat prompts.
pub trait ChatBackend: Send + Sync {
    fn chat<'a>(&'a self, request: ChatRequest) -> BoxFuture<'a, Result<RawResponse>>;
}

/// A backend that generates images from prompts.
pub trait ImageBackend: Send + Sync {
    fn generate_image<'a>(&'a self, request: ImageRequest) -> BoxFuture<'a, Result<RawResponse>>;
}

/// A backend that renders embeddable player markup for a video id.
pub trait EmbedBackend: Send + Sync {
    fn fetch_embed<'a>(&'a self, request: EmbedRequest) -> BoxFuture<'a, Result<EmbedResponse>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ConfigChange;

    #[test]
    fn chat_request_uses_the_wire_temperature() {
        let config = SessionConfig {
            provider: ProviderId::OpenAi,
            model: "o1-mini".into(),
            temperature: 0.2,
        };
        let request = ChatRequest::new("hi", &config);
        assert_eq!(request.temperature, 1.0);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["api_provider"], "openai");
        assert_eq!(json["model"], "o1-mini");
    }

    #[test]
    fn chat_request_follows_resolved_provider() {
        let config = SessionConfig::default().resolve(ConfigChange::Provider(ProviderId::LangGraph));
        let request = ChatRequest::new("news?", &config);
        assert_eq!(request.api_provider, ProviderId::LangGraph);
        assert_eq!(request.model, "google-gemini-graph");
    }

    #[test]
    fn image_request_defaults() {
        let request = ImageRequest::new("a lighthouse").with_size(768, 512);
        assert_eq!((request.width, request.height, request.steps), (768, 512, 1));
    }

    #[test]
    fn raw_response_ignores_unknown_fields() {
        let raw = RawResponse::from_json(br#"{"response":"hi","conversation_added":true}"#).unwrap();
        assert_eq!(raw.response.as_deref(), Some("hi"));
        assert!(raw.video_embed.is_none());
    }

    #[test]
    fn raw_response_accepts_null_embed_markup() {
        let raw = RawResponse::from_json(
            br#"{"response":"x","video_embed":{"video_id":"abc","embed_html":null}}"#,
        )
        .unwrap();
        let embed = raw.video_embed.unwrap();
        assert_eq!(embed.video_id.as_deref(), Some("abc"));
        assert!(embed.embed_html.is_none());
    }
}
