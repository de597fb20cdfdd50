//! HTTP implementation of the `bulls_core` backend traits.
//!
//! ```rust,no_run
//! use bulls_core::{ConfigChange, SessionConfig, backend::{ChatBackend, ChatRequest}, classify};
//! use bulls_http::BackendAdapterBuilder;
//!
//! # async fn run() -> bulls_core::Result<()> {
//! let backend = BackendAdapterBuilder::new_from_env().build()?;
//! let config = SessionConfig::default().resolve(ConfigChange::Model("gpt-4o".into()));
//! let raw = backend.chat(ChatRequest::new("Hello!", &config)).await?;
//! println!("{}", classify(raw)?.body());
//! # Ok(())
//! # }
//! ```

/// Emits a `tracing` event when the `tracing` feature is enabled and
/// compiles to nothing otherwise.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

mod adapter;
mod client;
pub mod error;

pub use adapter::{BackendAdapter, BackendAdapterBuilder, ENV_BASE_URL, ENV_TOKEN};
pub use client::BackendClient;
