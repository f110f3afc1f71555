use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    compatibility::{entities::CompatibilityReport, value_objects::CheckCompatibilityInput},
};

/// Service trait for companion-plant compatibility checks.
#[cfg_attr(test, mockall::automock)]
pub trait CompatibilityService: Send + Sync {
    fn check_compatibility(
        &self,
        input: CheckCompatibilityInput,
    ) -> impl Future<Output = Result<CompatibilityReport, CoreError>> + Send;
}
