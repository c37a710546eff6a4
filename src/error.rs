// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatResponse;
use crate::services::inference::InferenceError;

pub const INFERENCE_FAILURE_MESSAGE: &str = "Error fetching response from LM Studio";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The cause is already logged by the relay; callers only see a static body.
        match self {
            AppError::Inference(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse {
                    response: INFERENCE_FAILURE_MESSAGE.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
