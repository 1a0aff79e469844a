//! Infrastructure layer for tourchat.
//!
//! Contains the remote [`LlmProvider`](tourchat_core::llm::provider::LlmProvider)
//! implementations (Poe, OpenRouter), the provider factory, the
//! `config.toml` loader and environment secret resolution.

pub mod config;
pub mod llm;
pub mod secret;
