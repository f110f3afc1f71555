use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    seasonal::{entities::SeasonalCareEntry, value_objects::GetSeasonalCareInput},
};

/// Service trait for seasonal care lookups.
#[cfg_attr(test, mockall::automock)]
pub trait SeasonalCareService: Send + Sync {
    fn get_seasonal_care(
        &self,
        input: GetSeasonalCareInput,
    ) -> impl Future<Output = Result<SeasonalCareEntry, CoreError>> + Send;
}
