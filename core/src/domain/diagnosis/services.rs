use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::{
        entities::HealthIssue, matcher::match_symptoms, ports::DiagnosisService,
        value_objects::DiagnosePlantInput,
    },
    identification::ports::VisionClient,
};

impl<V> DiagnosisService for Service<V>
where
    V: VisionClient,
{
    async fn diagnose_plant(
        &self,
        input: DiagnosePlantInput,
    ) -> Result<Vec<HealthIssue>, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::NoImage);
        }

        // The image is required by the contract but not analyzed; issues
        // come from the symptom text alone.
        tracing::debug!(plant_type = %input.plant_type, "diagnosing plant health");

        Ok(match_symptoms(&self.health_catalog, &input.symptoms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnosis::value_objects::DEFAULT_PLANT_TYPE;
    use crate::domain::identification::ports::VisionClient;

    struct NoopVisionClient;

    impl VisionClient for NoopVisionClient {
        async fn describe_image(
            &self,
            _prompt: String,
            _image_data: Vec<u8>,
            _mime_type: String,
        ) -> Result<String, CoreError> {
            Err(CoreError::InternalServerError)
        }
    }

    #[tokio::test]
    async fn missing_image_is_an_input_error() {
        let service = Service::new(NoopVisionClient);

        let result = service
            .diagnose_plant(DiagnosePlantInput {
                image_data: Vec::new(),
                plant_type: DEFAULT_PLANT_TYPE.to_string(),
                symptoms: "spots".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::NoImage));
    }

    #[tokio::test]
    async fn diagnosis_never_returns_more_than_three_issues() {
        let service = Service::new(NoopVisionClient);

        let issues = service
            .diagnose_plant(DiagnosePlantInput {
                image_data: vec![1],
                plant_type: DEFAULT_PLANT_TYPE.to_string(),
                symptoms: "brown spots, bugs, wilting, pale leaves".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(issues.len(), 3);
    }
}
