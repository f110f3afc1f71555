use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use floralens_core::domain::rare_plants::ports::RarePlantService;

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRarePlantAlertResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/rare-plants",
    tag = "rare-plants",
    summary = "Register a rare plant availability alert",
    description = "Accepts an arbitrary alert payload and echoes it back",
    responses(
        (status = 200, body = CreateRarePlantAlertResponse)
    ),
)]
pub async fn create_rare_plant_alert(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Response<CreateRarePlantAlertResponse>, ApiError> {
    let data = state
        .service
        .save_rare_plant_alert(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CreateRarePlantAlertResponse {
        success: true,
        data,
    }))
}
