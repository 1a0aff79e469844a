//! LlmProvider trait definition.
//!
//! This is the core abstraction that every remote completion backend
//! implements. Uses RPITIT for `complete`; `BoxLlmProvider` erases it for
//! runtime provider lists.

use tourchat_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for remote completion backends (Poe, OpenRouter, ...).
///
/// Implementations live in tourchat-infra. A provider makes a single attempt
/// per call; the provider chain owns timeouts and failover.
pub trait LlmProvider: Send + Sync {
    /// Short provider name used in logs (e.g., "poe", "openrouter").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response text.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
