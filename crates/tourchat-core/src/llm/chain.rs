//! Ordered provider chain with a local terminal.
//!
//! Remote providers are tried strictly in order, once each, under a per-call
//! timeout. The first non-empty reply wins. If every remote fails, the local
//! reasoning engine answers, so `respond` cannot fail.

use std::time::Duration;

use tourchat_types::catalog::{DemoType, ItemKnowledge};
use tourchat_types::chat::{ChatTurn, MessageRole};
use tourchat_types::config::AssistantSettings;
use tourchat_types::llm::{CompletionRequest, LlmError, Message};
use tracing::Instrument;

use super::box_provider::BoxLlmProvider;
use crate::assistant::local::LocalReasoningEngine;

/// Name reported when the local engine produced the reply.
pub const LOCAL_PROVIDER_NAME: &str = "local";

/// Everything one turn needs, borrowed from the request.
#[derive(Debug, Clone, Copy)]
pub struct ChainInput<'a> {
    pub system_prompt: &'a str,
    pub history: &'a [ChatTurn],
    pub message: &'a str,
    pub catalog: &'a [ItemKnowledge],
    pub demo_type: &'a DemoType,
}

/// Raw reply text (sentinels still embedded) and who produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReply {
    pub content: String,
    pub provider: String,
}

pub struct ProviderChain {
    remotes: Vec<BoxLlmProvider>,
    call_timeout: Duration,
    history_window: usize,
}

impl ProviderChain {
    pub fn new(remotes: Vec<BoxLlmProvider>, settings: &AssistantSettings) -> Self {
        Self {
            remotes,
            call_timeout: Duration::from_millis(settings.provider_timeout_ms),
            history_window: settings.history_window,
        }
    }

    /// A chain with no remote providers; every turn is answered locally.
    pub fn local_only(settings: &AssistantSettings) -> Self {
        Self::new(Vec::new(), settings)
    }

    /// Names of the configured remote providers, in order.
    pub fn remote_names(&self) -> Vec<&str> {
        self.remotes.iter().map(BoxLlmProvider::name).collect()
    }

    /// Produce a reply for one turn. Infallible.
    pub async fn respond(&self, input: &ChainInput<'_>) -> ChainReply {
        if !self.remotes.is_empty() {
            let request = self.remote_request(input);
            for provider in &self.remotes {
                match self.call(provider, &request).await {
                    Ok(content) => {
                        return ChainReply {
                            content,
                            provider: provider.name().to_string(),
                        };
                    }
                    Err(err) => {
                        tracing::warn!(
                            provider = provider.name(),
                            error = %err,
                            "Provider failed, trying next in chain"
                        );
                    }
                }
            }
        }

        let engine = LocalReasoningEngine::new(input.catalog, input.demo_type);
        ChainReply {
            content: engine.respond(input.history, input.message),
            provider: LOCAL_PROVIDER_NAME.to_string(),
        }
    }

    async fn call(
        &self,
        provider: &BoxLlmProvider,
        request: &CompletionRequest,
    ) -> Result<String, LlmError> {
        let span = tracing::info_span!(
            "gen_ai.complete",
            gen_ai.system = provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.message_count = request.messages.len(),
        );

        let timeout_ms = self.call_timeout.as_millis() as u64;
        let response = tokio::time::timeout(self.call_timeout, provider.complete(request))
            .instrument(span)
            .await
            .map_err(|_| LlmError::Timeout(timeout_ms))??;

        if response.content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        tracing::debug!(model = %response.model, "Provider answered");
        Ok(response.content)
    }

    /// System prompt, the most recent non-system history turns, then the
    /// new user message.
    fn remote_request(&self, input: &ChainInput<'_>) -> CompletionRequest {
        let turns: Vec<&ChatTurn> = input
            .history
            .iter()
            .filter(|turn| turn.role != MessageRole::System)
            .collect();
        let skip = turns.len().saturating_sub(self.history_window);

        let mut messages: Vec<Message> = turns
            .into_iter()
            .skip(skip)
            .map(|turn| Message {
                role: turn.role,
                content: turn.content.clone(),
            })
            .collect();
        messages.push(Message::user(input.message));

        CompletionRequest {
            model: String::new(),
            messages,
            system: Some(input.system_prompt.to_string()),
            max_tokens: None,
            temperature: None,
        }
    }
}
