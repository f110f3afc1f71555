use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    assistant::validators::AskAssistantValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use floralens_core::domain::assistant::{ports::AssistantService, value_objects::AskAssistantInput};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AskAssistantResponse {
    pub answer: String,
}

#[utoipa::path(
    post,
    path = "/assistant",
    tag = "assistant",
    summary = "Ask the plant care assistant",
    description = "Answers a care question from the built-in knowledge base",
    request_body = AskAssistantValidator,
    responses(
        (status = 200, body = AskAssistantResponse)
    ),
)]
pub async fn ask_assistant(
    State(state): State<AppState>,
    Json(payload): Json<AskAssistantValidator>,
) -> Result<Response<AskAssistantResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let answer = state
        .service
        .ask_assistant(AskAssistantInput {
            question: payload.question,
            plant_name: payload.plant_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AskAssistantResponse { answer }))
}
