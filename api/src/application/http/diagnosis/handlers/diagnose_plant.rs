use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use floralens_core::domain::diagnosis::{
    entities::HealthIssue,
    ports::DiagnosisService,
    value_objects::{DEFAULT_PLANT_TYPE, DiagnosePlantInput},
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DiagnosePlantResponse {
    pub success: bool,
    pub issues: Vec<HealthIssue>,
}

#[utoipa::path(
    post,
    path = "/diagnose",
    tag = "diagnosis",
    summary = "Diagnose plant health issues",
    description = "Matches the described symptoms against the health issue knowledge base",
    responses(
        (status = 200, body = DiagnosePlantResponse)
    ),
)]
pub async fn diagnose_plant(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DiagnosePlantResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut plant_type = DEFAULT_PLANT_TYPE.to_string();
    let mut symptoms = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            "plantType" => {
                plant_type = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read plantType: {}", e))
                })?;
            }
            "symptoms" => {
                symptoms = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read symptoms: {}", e))
                })?;
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    let issues = state
        .service
        .diagnose_plant(DiagnosePlantInput {
            image_data,
            plant_type,
            symptoms,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiagnosePlantResponse {
        success: true,
        issues,
    }))
}
