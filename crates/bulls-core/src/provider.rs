//! Provider identities and the capabilities derived from them.
//!
//! Exactly one [`ProviderId`] is active per session. Everything the front
//! end needs to decide which controls to show (temperature slider, model
//! picker) is exposed as a pure query on the enum instead of being spread
//! over UI conditionals.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{catalog, error::BullsError};

/// Backend integration path a chat request is routed through.
///
/// Serialises to the lowercase identifiers the backend expects in the
/// `api_provider` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    #[default]
    OpenAi,
    Anthropic,
    Groq,
    Google,
    HuggingFace,
    LangChain,
    LangGraph,
}

impl ProviderId {
    /// Every provider, in the order the front end lists them.
    pub const ALL: [ProviderId; 7] = [
        ProviderId::OpenAi,
        ProviderId::Anthropic,
        ProviderId::Groq,
        ProviderId::Google,
        ProviderId::HuggingFace,
        ProviderId::LangChain,
        ProviderId::LangGraph,
    ];

    /// Wire identifier, e.g. `"huggingface"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Groq => "groq",
            ProviderId::Google => "google",
            ProviderId::HuggingFace => "huggingface",
            ProviderId::LangChain => "langchain",
            ProviderId::LangGraph => "langgraph",
        }
    }

    /// Valid temperature range for requests routed through this provider.
    pub const fn temperature_bounds(self) -> TemperatureBounds {
        match self {
            ProviderId::Anthropic => TemperatureBounds::new(-1.0, 1.0),
            _ => TemperatureBounds::new(-1.0, 2.0),
        }
    }

    /// Whether the user may pick a temperature at all for this provider.
    ///
    /// Providers that only expose a canonical model have no temperature
    /// control; a fixed-temperature model can still disable it for the
    /// others, see [`catalog::is_fixed_temperature`].
    pub const fn supports_adjustable_temperature(self) -> bool {
        !self.requires_canonical_model()
    }

    /// Whether switching to this provider always selects its canonical model.
    pub const fn requires_canonical_model(self) -> bool {
        matches!(
            self,
            ProviderId::HuggingFace | ProviderId::LangChain | ProviderId::LangGraph
        )
    }

    /// Model selected when switching to this provider and the current model
    /// is not offered by it.
    pub const fn default_model(self) -> &'static str {
        match self {
            ProviderId::OpenAi => catalog::OPENAI_DEFAULT,
            ProviderId::Anthropic => catalog::ANTHROPIC_DEFAULT,
            ProviderId::Groq => catalog::GROQ_DEFAULT,
            ProviderId::Google => catalog::GOOGLE_DEFAULT,
            ProviderId::HuggingFace => catalog::HUGGINGFACE_DEFAULT,
            ProviderId::LangChain => catalog::LANGCHAIN_DEFAULT,
            ProviderId::LangGraph => catalog::LANGGRAPH_DEFAULT,
        }
    }

    /// Models offered by this provider, in display order.
    pub fn models(self) -> impl Iterator<Item = &'static str> {
        catalog::models(self)
    }

    /// Whether `model` is offered by this provider.
    pub fn offers(self, model: &str) -> bool {
        catalog::models(self).any(|candidate| candidate == model)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = BullsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BullsError::Invalid(format!("unknown provider `{s}`")))
    }
}

/// Inclusive `[min, max]` temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBounds {
    pub min: f64,
    pub max: f64,
}

impl TemperatureBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, temperature: f64) -> bool {
        (self.min..=self.max).contains(&temperature)
    }

    /// Clamp `temperature` into range. `NaN` maps to `fallback`, itself clamped.
    pub fn clamp(&self, temperature: f64, fallback: f64) -> f64 {
        let value = if temperature.is_nan() { fallback } else { temperature };
        value.clamp(self.min, self.max)
    }
}
