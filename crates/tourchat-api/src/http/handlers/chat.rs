//! Chat endpoints.
//!
//! - POST /chat        - run one assistant turn
//! - GET  /chat/health - report which remote providers are configured

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::Instrument;
use uuid::Uuid;

use tourchat_observe::genai_attrs::OP_CHAT;
use tourchat_types::chat::{AssistantReply, ChatRequest, HealthStatus};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /chat - Validate the request and run it through the pipeline.
///
/// Provider failures never reach the caller; only a rejected body or an
/// empty message produces a 4xx.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<AssistantReply>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let span = tracing::info_span!(
        "chat",
        gen_ai.operation.name = OP_CHAT,
        request_id = %Uuid::now_v7(),
        demo_id = %request.demo_id,
        demo_type = %request.demo_type,
        history_len = request.history.len(),
    );

    let reply = state
        .chat_service
        .handle(&request)
        .instrument(span)
        .await?;

    Ok(Json(reply))
}

/// GET /chat/health - Liveness plus remote provider configuration.
pub async fn chat_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.chat_service.health())
}
