use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AskAssistantValidator {
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,

    #[serde(default, rename = "plantName")]
    pub plant_name: Option<String>,
}
