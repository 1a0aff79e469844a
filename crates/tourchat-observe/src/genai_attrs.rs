//! OpenTelemetry GenAI Semantic Convention attribute names and values.
//!
//! `tracing` span macros need literal field names, so spans spell these out
//! (`gen_ai.system = ...`); the constants here name the same keys for code
//! that records attributes dynamically and for the values tourchat emits.

/// The name of the operation being performed (e.g., "chat").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The provider that served the call (e.g., "poe").
pub const GEN_AI_SYSTEM: &str = "gen_ai.system";

/// The model or bot requested.
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

// --- Operation name values ---

/// One assistant turn through the provider chain.
pub const OP_CHAT: &str = "chat";

