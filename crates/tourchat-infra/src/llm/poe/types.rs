//! Poe bot protocol types.
//!
//! Wire structures for `POST /bot/{name}`. These are Poe-specific and
//! separate from the provider-agnostic types in tourchat-types.

use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: &str = "1.0";
pub const QUERY_TYPE: &str = "query";
pub const CONTENT_TYPE_MARKDOWN: &str = "text/markdown";

/// Request body for a Poe query.
///
/// Calls are stateless, so the user, conversation and message ids are sent
/// empty.
#[derive(Debug, Clone, Serialize)]
pub struct PoeRequest {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub query: Vec<PoeMessage>,
    pub temperature: f64,
    pub user_id: String,
    pub conversation_id: String,
    pub message_id: String,
}

/// One entry in the query. Roles are `system`, `user` and `bot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoeMessage {
    pub role: String,
    pub content: String,
    pub content_type: String,
}

/// Payload of `text` and `replace_response` events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub text: String,
}

/// Payload of an `error` event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    pub fn describe(&self) -> &str {
        self.text
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("unknown error")
    }
}
