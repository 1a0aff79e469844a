//! Poe bot API provider.
//!
//! This module provides the [`PoeProvider`] which implements the
//! [`LlmProvider`](tourchat_core::llm::provider::LlmProvider) trait for the
//! Poe server-bot protocol. Replies arrive as server-sent events.

pub mod client;
pub mod streaming;
pub mod types;

pub use client::PoeProvider;
