//! Application state wiring the chat pipeline together.
//!
//! AppState is built once at startup and shared immutably by the CLI and
//! the REST API handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tourchat_core::assistant::service::ChatService;
use tourchat_core::llm::chain::ProviderChain;
use tourchat_infra::config::{default_config_path, load_config};
use tourchat_infra::llm::build_remote_providers;
use tourchat_infra::secret::EnvSecretProvider;
use tourchat_types::config::AssistantConfig;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub config: Arc<AssistantConfig>,
    pub config_path: PathBuf,
}

impl AppState {
    /// Load configuration, resolve provider keys from the environment and
    /// wire the provider chain.
    pub async fn init(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };
        let config = load_config(Some(&config_path)).await;
        Ok(Self::from_config(config, config_path, &EnvSecretProvider::new()))
    }

    pub fn from_config(
        config: AssistantConfig,
        config_path: PathBuf,
        secrets: &EnvSecretProvider,
    ) -> Self {
        let (remotes, configured) = build_remote_providers(&config, secrets);
        let chain = ProviderChain::new(remotes, &config.assistant);
        let chat_service = ChatService::new(chain, &config.assistant, configured);
        Self::new(chat_service, config, config_path)
    }

    pub fn new(chat_service: ChatService, config: AssistantConfig, config_path: PathBuf) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
            config_path,
        }
    }
}
