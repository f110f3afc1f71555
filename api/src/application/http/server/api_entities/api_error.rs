use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use floralens_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error surface of the HTTP layer. Every variant renders the
/// `{ "error": ... }` body clients rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    /// The vision model answered but its text could not be turned into
    /// plant data. Carries the raw model text for client-side debugging.
    UnparseableResponse {
        message: String,
        raw_response: String,
    },
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(rename = "rawResponse", skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error,
                    raw_response: None,
                },
            ),
            ApiError::InternalServerError(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error,
                    raw_response: None,
                },
            ),
            ApiError::UnparseableResponse {
                message,
                raw_response,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: message,
                    raw_response: Some(raw_response),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NoImage => ApiError::BadRequest("No image provided".to_string()),
            CoreError::MissingApiKey => {
                ApiError::InternalServerError("API key not configured".to_string())
            }
            CoreError::EmptyModelResponse => ApiError::InternalServerError(
                "Failed to get a valid response from Gemini API".to_string(),
            ),
            CoreError::ExternalServiceError(details) => {
                tracing::error!("Vision service failure: {}", details);
                ApiError::InternalServerError("Failed to process the image".to_string())
            }
            CoreError::InvalidModelJson { raw_response, .. }
            | CoreError::PlantSchemaViolation { raw_response, .. } => {
                ApiError::UnparseableResponse {
                    message: "Failed to parse plant identification data".to_string(),
                    raw_response,
                }
            }
            CoreError::UnknownSeason(season) => {
                ApiError::BadRequest(format!("Unknown season: {}", season))
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_image_maps_to_bad_request_with_exact_body() {
        assert_eq!(
            ApiError::from(CoreError::NoImage),
            ApiError::BadRequest("No image provided".to_string())
        );
    }

    #[test]
    fn missing_api_key_maps_to_internal_error() {
        assert_eq!(
            ApiError::from(CoreError::MissingApiKey),
            ApiError::InternalServerError("API key not configured".to_string())
        );
    }

    #[test]
    fn empty_model_response_maps_to_internal_error() {
        assert_eq!(
            ApiError::from(CoreError::EmptyModelResponse),
            ApiError::InternalServerError(
                "Failed to get a valid response from Gemini API".to_string()
            )
        );
    }

    #[test]
    fn upstream_details_are_never_exposed_to_clients() {
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceError("403 quota".to_string())),
            ApiError::InternalServerError("Failed to process the image".to_string())
        );
    }

    #[test]
    fn parse_failures_carry_the_raw_model_text() {
        let error = CoreError::InvalidModelJson {
            raw_response: "not json".to_string(),
            reason: "expected value".to_string(),
        };

        assert_eq!(
            ApiError::from(error),
            ApiError::UnparseableResponse {
                message: "Failed to parse plant identification data".to_string(),
                raw_response: "not json".to_string(),
            }
        );
    }

    #[test]
    fn schema_violations_carry_the_raw_model_text() {
        let error = CoreError::PlantSchemaViolation {
            raw_response: "{\"plantName\":\"\"}".to_string(),
            reason: "plantName is empty".to_string(),
        };

        assert_eq!(
            ApiError::from(error),
            ApiError::UnparseableResponse {
                message: "Failed to parse plant identification data".to_string(),
                raw_response: "{\"plantName\":\"\"}".to_string(),
            }
        );
    }
}
