use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No image provided")]
    NoImage,

    #[error("API key not configured")]
    MissingApiKey,

    #[error("Failed to get a valid response from Gemini API")]
    EmptyModelResponse,

    #[error("Vision API error: {0}")]
    ExternalServiceError(String),

    #[error("Model response is not valid JSON: {reason}")]
    InvalidModelJson { raw_response: String, reason: String },

    #[error("Model response is missing required plant data: {reason}")]
    PlantSchemaViolation { raw_response: String, reason: String },

    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Internal server error")]
    InternalServerError,
}
