//! Chat service orchestrating one assistant turn.
//!
//! ChatService validates the request, renders the system prompt, runs the
//! provider chain and decodes navigation out of the reply. It holds no
//! per-conversation state; everything is rebuilt from the request.

use chrono::Utc;
use tourchat_types::catalog::Locale;
use tourchat_types::chat::{AssistantReply, ChatRequest, HealthStatus, SessionContext};
use tourchat_types::config::AssistantSettings;
use tourchat_types::error::ChatError;
use tracing::debug;

use super::local::lexicon::has_arabic;
use super::local::replies;
use super::navigation;
use super::prompt::PromptBuilder;
use crate::llm::chain::{ChainInput, ProviderChain};

/// Which remote provider slots were configured at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfiguredProviders {
    pub provider_a: bool,
    pub provider_b: bool,
}

pub struct ChatService {
    chain: ProviderChain,
    max_catalog_items: usize,
    configured: ConfiguredProviders,
}

impl ChatService {
    pub fn new(
        chain: ProviderChain,
        settings: &AssistantSettings,
        configured: ConfiguredProviders,
    ) -> Self {
        Self {
            chain,
            max_catalog_items: settings.max_catalog_items,
            configured,
        }
    }

    /// Run one turn of the pipeline.
    ///
    /// Only an empty message is an error; provider failures are absorbed by
    /// the chain and a reply is always produced.
    pub async fn handle(&self, request: &ChatRequest) -> Result<AssistantReply, ChatError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(ChatError::empty_message());
        }

        let context = SessionContext::from_request(request);
        let system_prompt = PromptBuilder::build_system_prompt(&context, self.max_catalog_items);

        let input = ChainInput {
            system_prompt: &system_prompt,
            history: &request.history,
            message,
            catalog: &context.catalog,
            demo_type: &context.demo_type,
        };
        let reply = self.chain.respond(&input).await;

        let decoded = navigation::decode(&reply.content, &context.catalog);
        debug!(
            provider = %reply.provider,
            navigation = decoded.navigation.as_ref().map(|n| n.item_id),
            "Assistant turn complete"
        );

        let text = if decoded.text.trim().is_empty() {
            let locale = if has_arabic(message) {
                Locale::Ar
            } else {
                context.locale
            };
            replies::navigation_only(
                decoded.navigation.as_ref().map(|n| n.item_name.as_str()),
                locale,
            )
        } else {
            decoded.text
        };

        Ok(AssistantReply {
            message: text,
            timestamp: Utc::now(),
            navigation: decoded.navigation,
        })
    }

    /// Liveness plus which remote providers are configured.
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            provider_a_configured: self.configured.provider_a,
            provider_b_configured: self.configured.provider_b,
        }
    }

    pub fn chain(&self) -> &ProviderChain {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use tourchat_types::catalog::ItemKnowledge;
    use tourchat_types::chat::ChatTurn;
    use tourchat_types::llm::{CompletionRequest, CompletionResponse, LlmError};

    use super::*;
    use crate::assistant::local::LocalReasoningEngine;
    use crate::assistant::navigation::SENTINEL_PREFIX;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::llm::provider::LlmProvider;

    struct FixedProvider {
        name: &'static str,
        reply: Result<&'static str, ()>,
    }

    impl LlmProvider for FixedProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
            let reply = self.reply;
            async move {
                match reply {
                    Ok(text) => Ok(CompletionResponse {
                        content: text.to_string(),
                        model: "fixed".to_string(),
                    }),
                    Err(()) => Err(LlmError::Provider {
                        message: "down".to_string(),
                    }),
                }
            }
        }
    }

    fn service(remotes: Vec<BoxLlmProvider>) -> ChatService {
        let settings = AssistantSettings::default();
        ChatService::new(
            ProviderChain::new(remotes, &settings),
            &settings,
            ConfiguredProviders::default(),
        )
    }

    fn fridge() -> ItemKnowledge {
        ItemKnowledge::new(7, "Samsung Refrigerator")
            .with_category("Refrigerators")
            .with_price(18999.0, "EGP")
    }

    fn request(message: &str, items: Vec<ItemKnowledge>) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            demo_id: "awni".to_string(),
            demo_title: "Awni Electronics".to_string(),
            items: Some(items),
            ..ChatRequest::default()
        }
    }

    #[tokio::test]
    async fn test_rejects_blank_message() {
        let err = service(Vec::new())
            .handle(&request("   ", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[tokio::test]
    async fn test_local_reply_with_navigation() {
        let reply = service(Vec::new())
            .handle(&request("show me refrigerators", vec![fridge()]))
            .await
            .unwrap();
        assert!(reply.message.contains("18999"));
        assert!(!reply.message.contains(SENTINEL_PREFIX));
        let nav = reply.navigation.unwrap();
        assert_eq!(nav.item_id, 7);
        assert_eq!(nav.item_name, "Samsung Refrigerator");
    }

    #[tokio::test]
    async fn test_greeting_with_empty_catalog() {
        let reply = service(Vec::new())
            .handle(&request("hello", Vec::new()))
            .await
            .unwrap();
        assert!(!reply.message.is_empty());
        assert!(reply.navigation.is_none());
    }

    #[tokio::test]
    async fn test_confirmation_from_history() {
        let mut req = request("yes", vec![fridge()]);
        req.history = vec![ChatTurn::user("tell me about the Samsung Refrigerator")];
        let reply = service(Vec::new()).handle(&req).await.unwrap();
        assert_eq!(reply.navigation.unwrap().item_id, 7);
    }

    #[tokio::test]
    async fn test_ambiguous_name_lists_candidates() {
        let items = vec![
            ItemKnowledge::new(1, "LG Washing Machine"),
            ItemKnowledge::new(2, "Samsung Washing Machine"),
        ];
        let reply = service(Vec::new())
            .handle(&request("washing machine", items))
            .await
            .unwrap();
        assert!(reply.message.contains("LG Washing Machine"));
        assert!(reply.message.contains("Samsung Washing Machine"));
        assert!(reply.navigation.is_none());
    }

    #[tokio::test]
    async fn test_failed_remotes_match_local_engine() {
        let svc = service(vec![
            BoxLlmProvider::new(FixedProvider {
                name: "a",
                reply: Err(()),
            }),
            BoxLlmProvider::new(FixedProvider {
                name: "b",
                reply: Ok(""),
            }),
        ]);
        let req = request("show me refrigerators", vec![fridge()]);
        let reply = svc.handle(&req).await.unwrap();

        let catalog = vec![fridge()];
        let local = LocalReasoningEngine::new(&catalog, &req.demo_type)
            .respond(&req.history, "show me refrigerators");
        let expected = navigation::decode(&local, &catalog);
        assert_eq!(reply.message, expected.text);
        assert_eq!(reply.navigation, expected.navigation);
    }

    #[tokio::test]
    async fn test_remote_sentinel_is_decoded() {
        let svc = service(vec![BoxLlmProvider::new(FixedProvider {
            name: "a",
            reply: Ok("Here is our best fridge. [[FLY_TO:7]]"),
        })]);
        let reply = svc
            .handle(&request("best fridge?", vec![fridge()]))
            .await
            .unwrap();
        assert_eq!(reply.message, "Here is our best fridge.");
        assert_eq!(reply.navigation.unwrap().item_id, 7);
    }

    #[tokio::test]
    async fn test_sentinel_only_reply_gets_text() {
        let svc = service(vec![BoxLlmProvider::new(FixedProvider {
            name: "a",
            reply: Ok("[[FLY_TO:7]]"),
        })]);
        let reply = svc
            .handle(&request("fridge", vec![fridge()]))
            .await
            .unwrap();
        assert_eq!(reply.message, "Taking you to Samsung Refrigerator.");
        assert_eq!(reply.navigation.unwrap().item_id, 7);
    }

    #[tokio::test]
    async fn test_unknown_remote_id_is_dropped() {
        let svc = service(vec![BoxLlmProvider::new(FixedProvider {
            name: "a",
            reply: Ok("Over here [[FLY_TO:404]]"),
        })]);
        let reply = svc
            .handle(&request("fridge", vec![fridge()]))
            .await
            .unwrap();
        assert_eq!(reply.message, "Over here");
        assert!(reply.navigation.is_none());
    }

    #[test]
    fn test_health_reports_configured_slots() {
        let settings = AssistantSettings::default();
        let svc = ChatService::new(
            ProviderChain::local_only(&settings),
            &settings,
            ConfiguredProviders {
                provider_a: true,
                provider_b: false,
            },
        );
        let health = svc.health();
        assert_eq!(health.status, "ok");
        assert!(health.provider_a_configured);
        assert!(!health.provider_b_configured);
    }
}
