//! Provider configuration resolver.
//!
//! The caller owns a [`SessionConfig`] and runs it through
//! [`SessionConfig::resolve`] after every user action. The result always
//! satisfies:
//!
//! * `model` is offered by `provider`,
//! * a fixed-temperature model runs at exactly `1.0`,
//! * otherwise `temperature` lies within the provider's bounds.
//!
//! Resolution is total. Anomalies are corrected in place; the only one a
//! caller may want to know about is an unknown model falling back to OpenAI,
//! reported through [`Resolution::fallback`].

use serde::{Deserialize, Serialize};

use crate::{catalog, provider::ProviderId};

/// Temperature a fresh session starts with, and what a `NaN` is reset to.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Temperature forced onto fixed-temperature models.
pub const FIXED_TEMPERATURE: f64 = 1.0;

/// The user-selected provider, model and temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub provider: ProviderId,
    pub model: String,
    pub temperature: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            provider: ProviderId::OpenAi,
            model: catalog::OPENAI_DEFAULT.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// A single user action on the configuration.
///
/// Picking a model and picking a provider are separate UI actions, so a call
/// carries at most one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChange {
    /// Re-validate the current configuration without changing the selection.
    None,
    /// The user picked a model from the list.
    Model(String),
    /// The user clicked a provider button.
    Provider(ProviderId),
}

/// Diagnostic emitted when a requested model is not in the catalog and the
/// session fell back to OpenAI's default model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModelFallback {
    pub requested: String,
    pub substituted: &'static str,
}

/// Outcome of [`SessionConfig::resolve_detailed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub config: SessionConfig,
    pub fallback: Option<UnknownModelFallback>,
}

impl SessionConfig {
    /// Apply `change` and return the corrected configuration.
    pub fn resolve(&self, change: ConfigChange) -> SessionConfig {
        self.resolve_detailed(change).config
    }

    /// Like [`Self::resolve`], but also reports an unknown-model fallback.
    pub fn resolve_detailed(&self, change: ConfigChange) -> Resolution {
        let mut next = self.clone();
        let mut fallback = None;

        match change {
            ConfigChange::Provider(provider) => {
                next.provider = provider;
                if provider.requires_canonical_model() || !provider.offers(&next.model) {
                    next.model = provider.default_model().to_owned();
                }
                if provider == ProviderId::Anthropic && next.temperature > 1.0 {
                    next.temperature = 1.0;
                }
            }
            ConfigChange::Model(model) => match catalog::provider_for(&model) {
                Some(provider) => {
                    next.provider = provider;
                    next.model = model;
                }
                None => {
                    log_event!(warn, requested = %model, "unknown model, falling back to openai");
                    next.provider = ProviderId::OpenAi;
                    next.model = catalog::OPENAI_DEFAULT.to_owned();
                    fallback = Some(UnknownModelFallback {
                        requested: model,
                        substituted: catalog::OPENAI_DEFAULT,
                    });
                }
            },
            ConfigChange::None => {
                if !next.provider.offers(&next.model) {
                    next.model = next.provider.default_model().to_owned();
                }
            }
        }

        next.temperature = next.effective_temperature();

        log_event!(
            debug,
            provider = %next.provider,
            model = %next.model,
            temperature = next.temperature,
            "resolved session config"
        );

        Resolution {
            config: next,
            fallback,
        }
    }

    /// Whether the selected model ignores temperature.
    pub fn is_fixed_temperature(&self) -> bool {
        catalog::is_fixed_temperature(&self.model)
    }

    /// Whether the temperature control should be enabled.
    pub fn temperature_adjustable(&self) -> bool {
        self.provider.supports_adjustable_temperature() && !self.is_fixed_temperature()
    }

    /// Temperature to put on the wire: `1.0` for fixed models, otherwise the
    /// current value clamped into the provider's bounds.
    pub fn effective_temperature(&self) -> f64 {
        if self.is_fixed_temperature() {
            FIXED_TEMPERATURE
        } else {
            self.provider
                .temperature_bounds()
                .clamp(self.temperature, DEFAULT_TEMPERATURE)
        }
    }
}
