use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    identification::ports::VisionClient,
    rare_plants::{
        entities::RarePlantListing,
        ports::RarePlantService,
        value_objects::{DEFAULT_LOCATION, SearchRarePlantsInput},
    },
};

impl<V> RarePlantService for Service<V>
where
    V: VisionClient,
{
    async fn search_rare_plants(
        &self,
        input: SearchRarePlantsInput,
    ) -> Result<Vec<RarePlantListing>, CoreError> {
        let location = input
            .location
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        tracing::debug!(%location, "searching rare plant catalog");

        Ok(self.rare_plant_catalog.search(input.query.as_deref()))
    }

    async fn save_rare_plant_alert(
        &self,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value, CoreError> {
        tracing::info!("rare plant alert received (not persisted)");
        Ok(payload)
    }
}
