use std::future::Future;

use crate::domain::{
    assistant::value_objects::AskAssistantInput, common::entities::app_errors::CoreError,
};

/// Service trait for the plant care Q&A assistant.
#[cfg_attr(test, mockall::automock)]
pub trait AssistantService: Send + Sync {
    fn ask_assistant(
        &self,
        input: AskAssistantInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
