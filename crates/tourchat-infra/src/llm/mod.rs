//! LLM provider implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined in
//! `tourchat-core`: Poe (SSE bot protocol) and OpenRouter (OpenAI-compatible).
//!
//! Also provides a provider factory ([`create_provider`]) and
//! [`build_remote_providers`], which assembles the chain's remote slots in
//! order from configuration and environment secrets.
//!
//! [`LlmProvider`]: tourchat_core::llm::provider::LlmProvider

pub mod openai_compat;
pub mod poe;

use secrecy::SecretString;

use tourchat_core::assistant::service::ConfiguredProviders;
use tourchat_core::llm::box_provider::BoxLlmProvider;
use tourchat_types::config::{AssistantConfig, RemoteProviderConfig, RemoteProviderKind};
use tourchat_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;
use self::poe::PoeProvider;
use crate::secret::EnvSecretProvider;

/// Create a [`BoxLlmProvider`] for one remote slot.
pub fn create_provider(
    kind: RemoteProviderKind,
    config: &RemoteProviderConfig,
    api_key: SecretString,
) -> Result<BoxLlmProvider, LlmError> {
    let model = config.model_for(kind);
    match kind {
        RemoteProviderKind::Poe => {
            let provider = PoeProvider::new(api_key, model)?
                .with_base_url(config.base_url_for(kind))
                .with_temperature(config.temperature);
            Ok(BoxLlmProvider::new(provider))
        }
        RemoteProviderKind::OpenRouter => {
            let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
                provider_name: kind.name().to_string(),
                base_url: config.base_url_for(kind),
                api_key,
                model,
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            });
            Ok(BoxLlmProvider::new(provider))
        }
    }
}

/// Build the remote providers in chain order (Poe, then OpenRouter).
///
/// A slot is configured when it is enabled and its API key variable is set.
/// Unconfigured slots are skipped; the chain then falls through to the local
/// engine sooner.
pub fn build_remote_providers(
    config: &AssistantConfig,
    secrets: &EnvSecretProvider,
) -> (Vec<BoxLlmProvider>, ConfiguredProviders) {
    let mut providers = Vec::new();
    let mut configured = ConfiguredProviders::default();

    let slots = [
        (RemoteProviderKind::Poe, &config.providers.poe),
        (RemoteProviderKind::OpenRouter, &config.providers.openrouter),
    ];

    for (kind, slot) in slots {
        if !slot.enabled {
            tracing::info!(provider = kind.name(), "Provider disabled in config");
            continue;
        }
        let key_env = slot.api_key_env_for(kind);
        let Some(api_key) = secrets.get(&key_env) else {
            tracing::info!(
                provider = kind.name(),
                env = %key_env,
                "API key not set, provider skipped"
            );
            continue;
        };

        match create_provider(kind, slot, api_key) {
            Ok(provider) => {
                tracing::info!(
                    provider = kind.name(),
                    model = %slot.model_for(kind),
                    "Remote provider configured"
                );
                providers.push(provider);
                match kind {
                    RemoteProviderKind::Poe => configured.provider_a = true,
                    RemoteProviderKind::OpenRouter => configured.provider_b = true,
                }
            }
            Err(err) => {
                tracing::warn!(provider = kind.name(), error = %err, "Failed to create provider");
            }
        }
    }

    (providers, configured)
}
