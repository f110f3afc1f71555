use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    rare_plants::{entities::RarePlantListing, value_objects::SearchRarePlantsInput},
};

/// Service trait for the rare plant directory.
#[cfg_attr(test, mockall::automock)]
pub trait RarePlantService: Send + Sync {
    fn search_rare_plants(
        &self,
        input: SearchRarePlantsInput,
    ) -> impl Future<Output = Result<Vec<RarePlantListing>, CoreError>> + Send;

    /// Persistence stub: acknowledges the submitted alert payload by echoing
    /// it back unchanged.
    fn save_rare_plant_alert(
        &self,
        payload: serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}
