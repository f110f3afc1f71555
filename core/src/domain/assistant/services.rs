use crate::domain::{
    assistant::{ports::AssistantService, value_objects::AskAssistantInput},
    common::{entities::app_errors::CoreError, services::Service},
    identification::ports::VisionClient,
};

impl<V> AssistantService for Service<V>
where
    V: VisionClient,
{
    async fn ask_assistant(&self, input: AskAssistantInput) -> Result<String, CoreError> {
        Ok(self
            .care_topics
            .answer(&input.question, input.plant_name.as_deref()))
    }
}
