use axum::extract::{Multipart, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use floralens_core::domain::identification::{
    entities::PlantRecord, ports::IdentificationService, value_objects::IdentifyPlantInput,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[utoipa::path(
    post,
    path = "/identify",
    tag = "identification",
    summary = "Identify a plant from a photo",
    description = "Sends the uploaded image to the vision model and returns the identified plant profile",
    responses(
        (status = 200, body = PlantRecord)
    ),
)]
pub async fn identify_plant(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<PlantRecord>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut mime_type = DEFAULT_MIME_TYPE.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name.as_str() == "image" {
            // content_type must be taken before bytes() consumes the field
            if let Some(content_type) = field.content_type() {
                mime_type = content_type.to_string();
            }

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
    }

    let image_data = image_data.ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    let record = state
        .service
        .identify_plant(IdentifyPlantInput {
            image_data,
            mime_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(record))
}
