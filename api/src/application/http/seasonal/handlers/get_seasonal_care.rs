use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use floralens_core::domain::seasonal::{
    entities::{Season, SeasonalCareEntry},
    ports::SeasonalCareService,
    value_objects::GetSeasonalCareInput,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSeasonalCareQuery {
    /// Season name (spring, summer, fall, winter); defaults to the current
    /// calendar season.
    pub season: Option<String>,
}

#[utoipa::path(
    get,
    path = "/seasonal-care",
    tag = "seasonal",
    summary = "Get seasonal care guidance",
    description = "Returns the care guide for the requested or current season",
    params(GetSeasonalCareQuery),
    responses(
        (status = 200, body = SeasonalCareEntry)
    ),
)]
pub async fn get_seasonal_care(
    State(state): State<AppState>,
    Query(params): Query<GetSeasonalCareQuery>,
) -> Result<Response<SeasonalCareEntry>, ApiError> {
    let season = params
        .season
        .map(|s| s.parse::<Season>())
        .transpose()
        .map_err(ApiError::from)?;

    let entry = state
        .service
        .get_seasonal_care(GetSeasonalCareInput { season })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(entry))
}
