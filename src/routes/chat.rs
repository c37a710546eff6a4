use axum::{
    extract::State,
    Json,
};
use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
    error::AppError,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // The message goes out exactly as received.
    let answer = state.relay.answer(&payload.message).await?;

    Ok(Json(ChatResponse { response: answer.text }))
}
