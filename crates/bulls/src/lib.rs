//! # `bulls` – The umbrella crate
//!
//! One import for the client side of the Bulls chat front end:
//!
//! | Crate            | What it provides                                                              |
//! |------------------|-------------------------------------------------------------------------------|
//! | **`bulls-core`** | Provider registry, configuration resolver, response classifier, enrichment    |
//! | **`bulls-http`** | `reqwest` client implementing the backend traits *(optional, `http` feature)* |
//!
//! The display layer keeps a [`SessionConfig`], runs it through
//! [`SessionConfig::resolve`] on every user action, and hands each backend
//! reply to [`classify()`]. Legacy `embedded` videos are upgraded with
//! [`materialize_legacy_video()`].
//!
//! ```rust,no_run
//! use bulls::{
//!     ConfigChange, PlayerDimensions, ResponseArtifact, SessionConfig, classify,
//!     backend::{ChatBackend, ChatRequest},
//!     materialize_legacy_video,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = bulls::http::BackendAdapterBuilder::new_from_env().build()?;
//!     let config = SessionConfig::default().resolve(ConfigChange::Model("gemini-2.0-flash".into()));
//!
//!     let raw = backend.chat(ChatRequest::new("Show me a video about tides", &config)).await?;
//!     match classify(raw)? {
//!         ResponseArtifact::LegacyVideo(video) if video.needs_enrichment() => {
//!             match materialize_legacy_video(&video, PlayerDimensions::default(), &backend).await {
//!                 Ok(player) => println!("{:?}", ResponseArtifact::StructuredVideo(player)),
//!                 Err(_) => println!("{}", video.cleaned_body),
//!             }
//!         }
//!         other => println!("{}", other.body()),
//!     }
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/bulls/latest")]

pub use bulls_core::*;

#[cfg(feature = "http")]
pub use bulls_http as http;
