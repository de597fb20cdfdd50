use bulls::{ConfigChange, ProviderId, SessionConfig, catalog};

fn starting_points() -> Vec<SessionConfig> {
    let temperatures = [-5.0, -1.0, 0.0, 0.7, 1.0, 1.5, 2.0, 9.0];
    let models = ["gpt-3.5-turbo", "o1-mini", "claude-3-haiku-20240307", "gemini-1.5-pro", "gpt2"];
    let mut configs = Vec::new();
    for provider in ProviderId::ALL {
        for model in models {
            for temperature in temperatures {
                configs.push(SessionConfig {
                    provider,
                    model: model.to_owned(),
                    temperature,
                });
            }
        }
    }
    configs
}

fn assert_consistent(config: &SessionConfig) {
    assert!(
        config.provider.offers(&config.model),
        "{} does not offer {}",
        config.provider,
        config.model
    );
    if catalog::is_fixed_temperature(&config.model) {
        assert_eq!(config.temperature, 1.0, "{config:?}");
    } else {
        assert!(
            config.provider.temperature_bounds().contains(config.temperature),
            "{config:?}"
        );
    }
}

#[test]
fn every_model_maps_back_to_a_provider_that_offers_it() {
    for provider in ProviderId::ALL {
        for model in provider.models() {
            let resolved = SessionConfig::default().resolve(ConfigChange::Model(model.to_owned()));
            assert!(resolved.provider.offers(model), "{model}");
            assert_eq!(resolved.model, model);
        }
    }
}

#[test]
fn models_without_overlap_map_to_their_own_provider() {
    for provider in ProviderId::ALL {
        for model in provider.models() {
            let owners = ProviderId::ALL.into_iter().filter(|p| p.offers(model)).count();
            if owners > 1 {
                continue;
            }
            let resolved = SessionConfig::default().resolve(ConfigChange::Model(model.to_owned()));
            assert_eq!(resolved.provider, provider, "{model}");
        }
    }
}

#[test]
fn fixed_models_always_resolve_to_temperature_one() {
    for start in starting_points() {
        for model in catalog::OPENAI_FIXED {
            let resolved = start.resolve(ConfigChange::Model((*model).to_owned()));
            assert_eq!(resolved.temperature, 1.0);
        }
    }
}

#[test]
fn every_resolution_is_consistent() {
    for start in starting_points() {
        assert_consistent(&start.resolve(ConfigChange::None));
        for provider in ProviderId::ALL {
            assert_consistent(&start.resolve(ConfigChange::Provider(provider)));
        }
        for model in ["o1-preview", "claude-3-7-sonnet-20250219", "google-gemini", "unknown"] {
            assert_consistent(&start.resolve(ConfigChange::Model(model.to_owned())));
        }
    }
}

#[test]
fn provider_switch_is_idempotent() {
    for start in starting_points() {
        for provider in ProviderId::ALL {
            let once = start.resolve(ConfigChange::Provider(provider));
            let twice = once.resolve(ConfigChange::Provider(provider));
            assert_eq!(once, twice);
        }
    }
}
