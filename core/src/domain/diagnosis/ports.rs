use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{entities::HealthIssue, value_objects::DiagnosePlantInput},
};

/// Service trait for plant health diagnosis.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosisService: Send + Sync {
    fn diagnose_plant(
        &self,
        input: DiagnosePlantInput,
    ) -> impl Future<Output = Result<Vec<HealthIssue>, CoreError>> + Send;
}
