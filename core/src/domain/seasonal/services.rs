use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    identification::ports::VisionClient,
    seasonal::{
        entities::{Season, SeasonalCareEntry},
        ports::SeasonalCareService,
        value_objects::GetSeasonalCareInput,
    },
};

impl<V> SeasonalCareService for Service<V>
where
    V: VisionClient,
{
    async fn get_seasonal_care(
        &self,
        input: GetSeasonalCareInput,
    ) -> Result<SeasonalCareEntry, CoreError> {
        let season = input.season.unwrap_or_else(Season::current);

        self.seasonal_guide
            .for_season(season)
            .cloned()
            .ok_or(CoreError::InternalServerError)
    }
}
