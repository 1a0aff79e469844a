//! Shared domain types for tourchat.
//!
//! Catalog items, chat requests and replies, LLM request/response shapes,
//! configuration and the error taxonomy used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
