use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    compatibility::{
        entities::CompatibilityReport, ports::CompatibilityService,
        value_objects::CheckCompatibilityInput,
    },
    identification::ports::VisionClient,
};

impl<V> CompatibilityService for Service<V>
where
    V: VisionClient,
{
    async fn check_compatibility(
        &self,
        input: CheckCompatibilityInput,
    ) -> Result<CompatibilityReport, CoreError> {
        Ok(CompatibilityReport {
            comparisons: self.compatibility_catalog.search(input.plant.as_deref()),
            suggested_plants: self.compatibility_catalog.suggested_plants.clone(),
        })
    }
}
