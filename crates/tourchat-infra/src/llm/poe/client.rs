//! PoeProvider -- concrete [`LlmProvider`] implementation for Poe bots.
//!
//! Sends one stateless query to `{base_url}/{bot}` with bearer
//! authentication and drains the SSE reply into a single string.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use eventsource_stream::Eventsource;
use secrecy::{ExposeSecret, SecretString};

use tourchat_core::llm::provider::LlmProvider;
use tourchat_types::config::RemoteProviderKind;
use tourchat_types::llm::{CompletionRequest, CompletionResponse, LlmError, MessageRole};

use super::streaming::collect_reply;
use super::types::{
    CONTENT_TYPE_MARKDOWN, PROTOCOL_VERSION, PoeMessage, PoeRequest, QUERY_TYPE,
};

/// Longest error body kept from a failed HTTP response.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Poe bot provider.
///
/// Does NOT derive Debug; the API key only leaves the struct when the
/// Authorization header is built.
pub struct PoeProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    temperature: f64,
}

impl PoeProvider {
    /// Create a provider for the bot named `model` at the default base URL.
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: RemoteProviderKind::Poe.default_base_url().to_string(),
            model: model.into(),
            temperature: 0.7,
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// The default bot for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn bot_for<'a>(&'a self, request: &'a CompletionRequest) -> &'a str {
        if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        }
    }

    fn url(&self, bot: &str) -> String {
        format!("{}/{}", self.base_url, bot)
    }

    /// Convert a generic [`CompletionRequest`] into a [`PoeRequest`].
    ///
    /// The system prompt goes first as a `system` entry; `assistant` turns
    /// are sent with Poe's `bot` role.
    fn to_poe_request(&self, request: &CompletionRequest) -> PoeRequest {
        let system = request.system.as_ref().map(|content| PoeMessage {
            role: "system".to_string(),
            content: content.clone(),
            content_type: CONTENT_TYPE_MARKDOWN.to_string(),
        });

        let query = system
            .into_iter()
            .chain(request.messages.iter().map(|m| PoeMessage {
                role: poe_role(m.role).to_string(),
                content: m.content.clone(),
                content_type: CONTENT_TYPE_MARKDOWN.to_string(),
            }))
            .collect();

        PoeRequest {
            version: PROTOCOL_VERSION.to_string(),
            kind: QUERY_TYPE.to_string(),
            query,
            temperature: request.temperature.unwrap_or(self.temperature),
            user_id: String::new(),
            conversation_id: String::new(),
            message_id: String::new(),
        }
    }
}

fn poe_role(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "bot",
    }
}

impl LlmProvider for PoeProvider {
    fn name(&self) -> &str {
        RemoteProviderKind::Poe.name()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let bot = self.bot_for(request).to_string();
        let body = self.to_poe_request(request);

        let response = self
            .client
            .post(self.url(&bot))
            .bearer_auth(self.api_key.expose_secret())
            .header("accept", "text/event-stream")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                code => LlmError::Http {
                    status: code,
                    body: error_body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
                },
            });
        }

        let content = collect_reply(response.bytes_stream().eventsource()).await?;

        Ok(CompletionResponse {
            content,
            model: bot,
        })
    }
}
