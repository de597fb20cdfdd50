//! # `bulls-core`
//!
//! The two pieces of real logic behind the Bulls chat front end:
//!
//! * [`resolver`] keeps the selected provider, model and temperature
//!   consistent whenever the user changes one of them.
//! * [`mod@classify`] turns an opaque backend response into a typed
//!   [`ResponseArtifact`], and [`enrich`] upgrades a legacy video reference
//!   into an embeddable player.
//!
//! Both are plain functions over values owned by the caller. Network access
//! only happens through the traits in [`backend`], which `bulls-http`
//! implements.
//!
//! ```rust
//! use bulls_core::{ConfigChange, ProviderId, SessionConfig};
//!
//! let config = SessionConfig::default().resolve(ConfigChange::Model("claude-3-haiku-20240307".into()));
//! assert_eq!(config.provider, ProviderId::Anthropic);
//! assert!(config.temperature <= 1.0);
//! ```

/// Emits a `tracing` event when the `tracing` feature is enabled and
/// compiles to nothing otherwise.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod artifact;
pub mod backend;
pub mod catalog;
pub mod classify;
pub mod enrich;
pub mod error;
mod legacy;
pub mod provider;
pub mod resolver;
pub mod sequence;

pub use artifact::{ImageArtifact, LegacyVideo, PlayerDimensions, ResponseArtifact, StructuredVideo, VideoKind};
pub use classify::classify;
pub use enrich::materialize_legacy_video;
pub use error::{BullsError, Result};
pub use provider::{ProviderId, TemperatureBounds};
pub use resolver::{ConfigChange, Resolution, SessionConfig, UnknownModelFallback};
pub use sequence::{RequestSequencer, RequestStamp};
