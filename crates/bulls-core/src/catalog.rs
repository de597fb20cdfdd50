//! Static model registry.
//!
//! Each provider offers an ordered list of model identifiers. OpenAI's list
//! is split into *fixed-temperature* models, which always run at
//! temperature 1, and *adjustable-temperature* models.
//!
//! The lists are not disjoint: `gemini-1.5-pro` and `gemini-1.5-flash` are
//! offered by google, langchain and langgraph alike. [`provider_for`]
//! resolves such identifiers through [`LOOKUP_ORDER`], so the first provider
//! in that order wins.
//!
//! # Adding more models
//!
//! Append the identifier to the provider's slice below. If it is the first
//! OpenAI model that ignores temperature, put it in [`OPENAI_FIXED`].

use crate::provider::ProviderId;

pub const OPENAI_DEFAULT: &str = "gpt-3.5-turbo";
pub const ANTHROPIC_DEFAULT: &str = "claude-3-5-sonnet-latest";
pub const GROQ_DEFAULT: &str = "llama-3.2-90b-vision-preview";
pub const GOOGLE_DEFAULT: &str = "gemini-1.5-pro";
pub const HUGGINGFACE_DEFAULT: &str = "gpt2";
pub const LANGCHAIN_DEFAULT: &str = "google-gemini";
pub const LANGGRAPH_DEFAULT: &str = "google-gemini-graph";

/// OpenAI models whose backend rejects temperature variation.
pub const OPENAI_FIXED: &[&str] = &[
    "o1-mini-2024-09-12",
    "o1-preview-2024-09-12",
    "o1-mini",
    "o1-preview",
];

pub const OPENAI_ADJUSTABLE: &[&str] = &[
    "gpt-3.5-turbo",
    "gpt-4-turbo",
    "gpt-4-turbo-preview",
    "gpt-4o-2024-11-20",
    "gpt-4o-mini-2024-07-18",
    "gpt-4-0125-preview",
    "gpt-4o-2024-08-06",
    "gpt-4o",
    "gpt-4-turbo-2024-04-09",
    "gpt-3.5-turbo-1106",
    "gpt-4o-mini",
    "gpt-4o--2024-05-13",
    "chatgpt-4o-latest",
    "gpt-3.5-turbo-0125",
    "gpt-3.5-turbo-16k",
    "gpt-4-1106-preview",
];

pub const ANTHROPIC: &[&str] = &[
    "claude-3-5-sonnet-latest",
    "claude-3-7-sonnet-20250219",
    "claude-3-5-sonnet-20241022",
    "claude-3-5-haiku-20241022",
    "claude-3-5-sonnet-20240620",
    "claude-3-haiku-20240307",
];

pub const GROQ: &[&str] = &[
    "llama-3.3-70b-versatile",
    "qwen-2.5-32b",
    "llama-3.2-1b-preview",
    "gemma2-9b-it",
    "mixtral-8x7b-32768",
    "deepseek-r1-distill-llama-70b",
    "qwen-2.5-coder-23b",
    "llama3-8b-8192",
    "llama-3.2-11b-vision-preview",
    "llama-3.2-90b-vision-preview",
];

pub const GOOGLE: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1-5-flash-002",
    "gemini-1.5-flash-8b",
    "gemini-1-5-flash-8b-001",
    "gemini-1.5-flash-8b-latest",
    "gemini-1.5-flash-8b-exp-0827",
    "gemini-1.5-flash-8b-exp-0927",
    "gemini-2.0-flash-exp",
    "gemini-2.0-flash",
    "gemini-1.5-pro-latest",
    "gemini-1.5-pro-001",
    "gemini-1.5-pro-002",
    "gemini-1.5-pro",
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash-001",
    "gemini-1.5-flash-001-tuning",
    "gemini-2.0-flash-001",
    "gemini-2.0-flash-lite-001",
    "gemini-2.0-flash-lite",
    "gemini-2.0-flash-lite-preview-02-05",
    "gemini-2.0-flash-lite-preview",
    "gemini-2.0-pro-exp",
    "gemini-2.0-pro-exp-02-05",
    "gemini-exp-1206",
    "gemini-2.0-flash-thinking-exp-01-21",
    "gemini-2.0-flash-thinking-exp-1219",
    "learnlm-1.5-pro-experimental",
];

pub const HUGGINGFACE: &[&str] = &["gpt2", "gpt2-medium", "gpt2-large", "gpt2-xl", "distilgpt2"];

pub const LANGCHAIN: &[&str] = &["google-gemini", "gemini-1.5-pro", "gemini-1.5-flash"];

pub const LANGGRAPH: &[&str] = &["google-gemini-graph", "gemini-1.5-pro", "gemini-1.5-flash"];

/// Order in which providers are probed when deriving a provider from a model.
/// OpenAI is not probed; it is the fallback.
pub const LOOKUP_ORDER: [ProviderId; 6] = [
    ProviderId::Anthropic,
    ProviderId::Groq,
    ProviderId::Google,
    ProviderId::HuggingFace,
    ProviderId::LangChain,
    ProviderId::LangGraph,
];

/// Models offered by `provider`, in display order. OpenAI yields its fixed
/// models first.
pub fn models(provider: ProviderId) -> impl Iterator<Item = &'static str> {
    let (head, tail): (&[&'static str], &[&'static str]) = match provider {
        ProviderId::OpenAi => (OPENAI_FIXED, OPENAI_ADJUSTABLE),
        ProviderId::Anthropic => (ANTHROPIC, &[]),
        ProviderId::Groq => (GROQ, &[]),
        ProviderId::Google => (GOOGLE, &[]),
        ProviderId::HuggingFace => (HUGGINGFACE, &[]),
        ProviderId::LangChain => (LANGCHAIN, &[]),
        ProviderId::LangGraph => (LANGGRAPH, &[]),
    };
    head.iter().chain(tail).copied()
}

/// Whether the model must always be sent with temperature 1.
pub fn is_fixed_temperature(model: &str) -> bool {
    OPENAI_FIXED.contains(&model)
}

/// Provider a model belongs to, following [`LOOKUP_ORDER`] and then OpenAI.
/// `None` if no provider offers it.
pub fn provider_for(model: &str) -> Option<ProviderId> {
    LOOKUP_ORDER
        .into_iter()
        .chain(std::iter::once(ProviderId::OpenAi))
        .find(|provider| provider.offers(model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_subsets_are_disjoint() {
        for model in OPENAI_FIXED {
            assert!(!OPENAI_ADJUSTABLE.contains(model), "{model}");
        }
    }

    #[test]
    fn overlapping_gemini_models_resolve_to_google() {
        assert_eq!(provider_for("gemini-1.5-pro"), Some(ProviderId::Google));
        assert_eq!(provider_for("gemini-1.5-flash"), Some(ProviderId::Google));
        assert_eq!(provider_for("google-gemini"), Some(ProviderId::LangChain));
        assert_eq!(provider_for("google-gemini-graph"), Some(ProviderId::LangGraph));
    }

    #[test]
    fn openai_models_are_found_last() {
        assert_eq!(provider_for("o1-mini"), Some(ProviderId::OpenAi));
        assert_eq!(provider_for("gpt-4o"), Some(ProviderId::OpenAi));
        assert_eq!(provider_for("text-davinci-003"), None);
    }

    #[test]
    fn fixed_temperature_is_model_level() {
        assert!(is_fixed_temperature("o1-preview"));
        assert!(!is_fixed_temperature("gpt-4o"));
        assert!(!is_fixed_temperature("claude-3-haiku-20240307"));
    }

    #[test]
    fn openai_lists_fixed_models_first() {
        let listed: Vec<_> = models(ProviderId::OpenAi).collect();
        assert_eq!(listed.len(), OPENAI_FIXED.len() + OPENAI_ADJUSTABLE.len());
        assert_eq!(listed[0], "o1-mini-2024-09-12");
        assert_eq!(listed[OPENAI_FIXED.len()], "gpt-3.5-turbo");
    }
}
