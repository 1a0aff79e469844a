//! Configuration and defaults for OpenAI-compatible providers.
//!
//! OpenRouter is the only such provider in the chain; its factory returns an
//! [`OpenAiCompatConfig`] with the right base URL and sampling defaults.

use secrecy::SecretString;

use tourchat_types::config::RemoteProviderKind;

/// Configuration for an OpenAI-compatible provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Provider name reported in logs and spans (e.g., "openrouter").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://openrouter.ai/api/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when the request leaves `model` empty.
    pub model: String,
    /// Sampling temperature used when the request does not set one.
    pub temperature: f64,
    /// Completion length cap used when the request does not set one.
    pub max_tokens: u32,
}

/// OpenRouter default configuration.
///
/// Base URL: `https://openrouter.ai/api/v1`, temperature 0.7, 500 tokens.
pub fn openrouter_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: RemoteProviderKind::OpenRouter.name().into(),
        base_url: RemoteProviderKind::OpenRouter.default_base_url().into(),
        api_key,
        model: model.into(),
        temperature: 0.7,
        max_tokens: 500,
    }
}
