use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    identification::{
        entities::PlantRecord,
        extractor::extract_plant_payload,
        ports::{IdentificationService, VisionClient},
        prompt::IDENTIFY_PLANT_PROMPT,
        value_objects::IdentifyPlantInput,
    },
};

impl<V> IdentificationService for Service<V>
where
    V: VisionClient,
{
    async fn identify_plant(&self, input: IdentifyPlantInput) -> Result<PlantRecord, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::NoImage);
        }

        // Known non-idempotent boundary: the model samples at temperature
        // 0.4, so two identical images may yield different records.
        let raw_response = self
            .vision_client
            .describe_image(
                IDENTIFY_PLANT_PROMPT.to_string(),
                input.image_data,
                input.mime_type,
            )
            .await?;

        let payload = extract_plant_payload(&raw_response)?;

        tracing::debug!(plant_name = %payload.plant_name, "identified plant");

        Ok(PlantRecord::from_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identification::entities::{DEFAULT_CONFIDENCE, default_tags};

    struct StubVisionClient {
        response: Result<String, CoreError>,
    }

    impl VisionClient for StubVisionClient {
        async fn describe_image(
            &self,
            _prompt: String,
            _image_data: Vec<u8>,
            _mime_type: String,
        ) -> Result<String, CoreError> {
            self.response.clone()
        }
    }

    fn service_with(response: Result<String, CoreError>) -> Service<StubVisionClient> {
        Service::new(StubVisionClient { response })
    }

    fn input() -> IdentifyPlantInput {
        IdentifyPlantInput {
            image_data: vec![0xFF, 0xD8, 0xFF],
            mime_type: "image/jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn applies_documented_defaults_to_sparse_payload() {
        let service = service_with(Ok(
            "```json\n{\"plantName\": \"Monstera Deliciosa\"}\n```".to_string()
        ));

        let record = service.identify_plant(input()).await.unwrap();

        assert_eq!(record.plant_name, "Monstera Deliciosa");
        assert_eq!(record.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(record.tags, default_tags());
        assert_eq!(record.details.len(), 4);
        assert!(record.care_instructions.is_empty());
    }

    #[tokio::test]
    async fn keeps_model_values_when_present() {
        let service = service_with(Ok(r#"{"plantName": "Pothos", "confidence": 72.5, "tags": ["Vine"]}"#.to_string()));

        let record = service.identify_plant(input()).await.unwrap();

        assert_eq!(record.confidence, 72.5);
        assert_eq!(record.tags, vec!["Vine".to_string()]);
    }

    #[tokio::test]
    async fn empty_image_is_rejected_before_the_upstream_call() {
        let service = service_with(Ok("unreachable".to_string()));

        let result = service
            .identify_plant(IdentifyPlantInput {
                image_data: Vec::new(),
                mime_type: "image/png".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::NoImage));
    }

    #[tokio::test]
    async fn upstream_errors_propagate_unchanged() {
        let service = service_with(Err(CoreError::EmptyModelResponse));

        let result = service.identify_plant(input()).await;

        assert_eq!(result, Err(CoreError::EmptyModelResponse));
    }

    #[tokio::test]
    async fn unparseable_response_keeps_the_raw_text() {
        let raw = "I think this is a cactus of some kind.";
        let service = service_with(Ok(raw.to_string()));

        match service.identify_plant(input()).await {
            Err(CoreError::InvalidModelJson { raw_response, .. }) => {
                assert_eq!(raw_response, raw);
            }
            other => panic!("expected InvalidModelJson, got {:?}", other),
        }
    }
}
