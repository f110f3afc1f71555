use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identification::{entities::PlantRecord, value_objects::IdentifyPlantInput},
};

/// Client trait for the upstream vision model.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    /// Sends one prompt + inline image request and returns the raw model
    /// text. Exactly one outbound call, no retries.
    fn describe_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for plant identification.
#[cfg_attr(test, mockall::automock)]
pub trait IdentificationService: Send + Sync {
    fn identify_plant(
        &self,
        input: IdentifyPlantInput,
    ) -> impl Future<Output = Result<PlantRecord, CoreError>> + Send;
}
