//! HTTP layer for tourchat.
//!
//! Axum router exposing `POST /chat`, `GET /chat/health` and `GET /health`
//! with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
