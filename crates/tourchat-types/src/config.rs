//! Configuration types for tourchat.
//!
//! `AssistantConfig` represents the top-level `config.toml` controlling the
//! provider chain and the remote providers it tries.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the assistant service.
///
/// Loaded from `~/.tourchat/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub assistant: AssistantSettings,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Pipeline settings shared by every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Per-call timeout for a remote provider, in milliseconds.
    #[serde(default = "default_provider_timeout_ms")]
    pub provider_timeout_ms: u64,

    /// Number of most recent non-system history turns sent to remote providers.
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Maximum number of catalog entries rendered into the prompt.
    #[serde(default = "default_max_catalog_items")]
    pub max_catalog_items: usize,
}

fn default_provider_timeout_ms() -> u64 {
    15_000
}

fn default_history_window() -> usize {
    10
}

fn default_max_catalog_items() -> usize {
    50
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            provider_timeout_ms: default_provider_timeout_ms(),
            history_window: default_history_window(),
            max_catalog_items: default_max_catalog_items(),
        }
    }
}

/// The two remote providers, in chain order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub poe: RemoteProviderConfig,

    #[serde(default)]
    pub openrouter: RemoteProviderConfig,
}

/// Which remote provider a config section describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteProviderKind {
    Poe,
    OpenRouter,
}

impl RemoteProviderKind {
    pub fn name(self) -> &'static str {
        match self {
            RemoteProviderKind::Poe => "poe",
            RemoteProviderKind::OpenRouter => "openrouter",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            RemoteProviderKind::Poe => "Claude-3-Haiku",
            RemoteProviderKind::OpenRouter => "meta-llama/llama-3.1-70b-instruct:free",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            RemoteProviderKind::Poe => "https://api.poe.com/bot",
            RemoteProviderKind::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }

    pub fn default_api_key_env(self) -> &'static str {
        match self {
            RemoteProviderKind::Poe => "POE_API_KEY",
            RemoteProviderKind::OpenRouter => "OPENROUTER_API_KEY",
        }
    }
}

/// One `[providers.<name>]` section. Unset fields fall back to the
/// provider's built-in defaults via the `*_for` accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteProviderConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Environment variable holding the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    500
}

impl Default for RemoteProviderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            model: None,
            base_url: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key_env: None,
        }
    }
}

impl RemoteProviderConfig {
    pub fn model_for(&self, kind: RemoteProviderKind) -> String {
        non_empty(self.model.as_deref()).unwrap_or(kind.default_model()).to_string()
    }

    pub fn base_url_for(&self, kind: RemoteProviderKind) -> String {
        non_empty(self.base_url.as_deref())
            .unwrap_or(kind.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn api_key_env_for(&self, kind: RemoteProviderKind) -> String {
        non_empty(self.api_key_env.as_deref())
            .unwrap_or(kind.default_api_key_env())
            .to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_config_default_values() {
        let config = AssistantConfig::default();
        assert_eq!(config.assistant.provider_timeout_ms, 15_000);
        assert_eq!(config.assistant.history_window, 10);
        assert_eq!(config.assistant.max_catalog_items, 50);
        assert!(config.providers.poe.enabled);
        assert!((config.providers.openrouter.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.providers.openrouter.max_tokens, 500);
    }

    #[test]
    fn test_assistant_config_deserialize_empty() {
        let config: AssistantConfig = toml::from_str("").unwrap();
        assert_eq!(config.assistant.provider_timeout_ms, 15_000);
        assert!(config.providers.openrouter.enabled);
    }

    #[test]
    fn test_assistant_config_deserialize_with_values() {
        let toml_str = r#"
[assistant]
provider_timeout_ms = 2000
history_window = 4

[providers.poe]
model = "GPT-4o-Mini"
api_key_env = "MY_POE_KEY"

[providers.openrouter]
enabled = false
"#;
        let config: AssistantConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.provider_timeout_ms, 2000);
        assert_eq!(config.assistant.history_window, 4);
        assert_eq!(config.assistant.max_catalog_items, 50);
        assert_eq!(
            config.providers.poe.model_for(RemoteProviderKind::Poe),
            "GPT-4o-Mini"
        );
        assert_eq!(
            config.providers.poe.api_key_env_for(RemoteProviderKind::Poe),
            "MY_POE_KEY"
        );
        assert!(!config.providers.openrouter.enabled);
    }

    #[test]
    fn test_provider_defaults_fill_unset_fields() {
        let section = RemoteProviderConfig {
            base_url: Some("https://example.test/v1/".to_string()),
            model: Some("  ".to_string()),
            ..RemoteProviderConfig::default()
        };
        let kind = RemoteProviderKind::OpenRouter;
        assert_eq!(section.base_url_for(kind), "https://example.test/v1");
        assert_eq!(section.model_for(kind), "meta-llama/llama-3.1-70b-instruct:free");
        assert_eq!(section.api_key_env_for(kind), "OPENROUTER_API_KEY");
    }
}
