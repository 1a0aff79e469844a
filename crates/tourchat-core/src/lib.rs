//! Business logic for tourchat.
//!
//! Prompt building, the `[[FLY_TO:<id>]]` navigation protocol, the local
//! reasoning engine and the provider chain. The `LlmProvider` trait defined
//! here is the port that tourchat-infra implements; this crate never depends
//! on tourchat-infra or any HTTP client.

pub mod assistant;
pub mod llm;
