//! SSE accumulation for Poe bot replies.
//!
//! Poe streams a reply as named events:
//! 1. `meta` -- content type information (ignored)
//! 2. `text` -- `{"text": ...}` chunk appended to the reply
//! 3. `replace_response` -- `{"text": ...}` replacing everything so far
//! 4. `done` -- end of reply
//! 5. `error` -- the bot failed; the call fails
//!
//! Other events (`suggested_reply`, `ping`, ...) are skipped. A stream that
//! closes without `done` fails; partial text is never returned.

use std::fmt::Display;

use eventsource_stream::Event;
use futures_util::{Stream, StreamExt};

use tourchat_types::llm::LlmError;

use super::types::{ErrorPayload, TextPayload};

/// Drain a Poe event stream into the final reply text.
pub async fn collect_reply<S, E>(events: S) -> Result<String, LlmError>
where
    S: Stream<Item = Result<Event, E>>,
    E: Display,
{
    let mut events = std::pin::pin!(events);
    let mut text = String::new();

    while let Some(event) = events.next().await {
        let event = event.map_err(|e| LlmError::Stream(e.to_string()))?;
        match event.event.as_str() {
            "text" => text.push_str(&chunk_text(&event.data)),
            "replace_response" => text = chunk_text(&event.data),
            "done" => return Ok(text),
            "error" => {
                let payload: ErrorPayload = serde_json::from_str(&event.data).unwrap_or_default();
                let detail = if payload.text.is_none() && payload.message.is_none() {
                    event.data.trim()
                } else {
                    payload.describe()
                };
                return Err(LlmError::Provider {
                    message: format!("poe error event: {detail}"),
                });
            }
            other => tracing::trace!(event = other, "Skipping Poe event"),
        }
    }

    Err(LlmError::Stream("stream ended before done".to_string()))
}

/// Text carried by a `text`/`replace_response` event. Data that is not the
/// expected JSON object is taken verbatim.
fn chunk_text(data: &str) -> String {
    match serde_json::from_str::<TextPayload>(data) {
        Ok(payload) => payload.text,
        Err(_) => data.to_string(),
    }
}
