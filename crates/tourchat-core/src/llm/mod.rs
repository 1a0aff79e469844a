//! LLM provider abstractions for tourchat.
//!
//! - `LlmProvider`: RPITIT trait for concrete remote providers
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch
//! - `ProviderChain`: ordered remote providers with the local engine as terminal

pub mod box_provider;
pub mod chain;
pub mod provider;
