//! Observability setup for tourchat: tracing subscriber initialization and
//! GenAI semantic-convention attribute names.

pub mod genai_attrs;
pub mod tracing_setup;
