use bulls::{ConfigChange, ProviderId, SessionConfig};

/// # Walking through provider and model changes
///
/// Replays a sequence of UI actions against the resolver and prints the
/// session after each one, including whether the temperature slider would
/// be enabled.
///
/// ```bash
/// cargo run -p bulls --example switch_providers
/// ```
fn main() {
    let actions = [
        ConfigChange::Model("o1-mini".into()),
        ConfigChange::Provider(ProviderId::Anthropic),
        ConfigChange::Model("gemini-1.5-pro".into()),
        ConfigChange::Provider(ProviderId::LangGraph),
        ConfigChange::Model("not-a-model".into()),
    ];

    let mut config = SessionConfig {
        temperature: 1.8,
        ..SessionConfig::default()
    };
    println!("start:   {config:?}");

    for action in actions {
        let resolution = config.resolve_detailed(action.clone());
        config = resolution.config;
        println!(
            "{action:?} -> {} / {} @ {} (slider {})",
            config.provider,
            config.model,
            config.temperature,
            if config.temperature_adjustable() { "enabled" } else { "disabled" },
        );
        if let Some(fallback) = resolution.fallback {
            println!("  unknown model `{}`, using `{}`", fallback.requested, fallback.substituted);
        }
    }
}
