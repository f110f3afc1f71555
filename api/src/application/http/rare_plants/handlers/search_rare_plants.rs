use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use floralens_core::domain::rare_plants::{
    entities::RarePlantListing, ports::RarePlantService, value_objects::SearchRarePlantsInput,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchRarePlantsQuery {
    /// Case-insensitive match against plant and scientific names.
    pub query: Option<String>,
    /// Display location; does not affect the result set.
    pub location: Option<String>,
}

#[utoipa::path(
    get,
    path = "/rare-plants",
    tag = "rare-plants",
    summary = "Search rare plant listings",
    description = "Searches the rare plant directory by plant or scientific name",
    params(SearchRarePlantsQuery),
    responses(
        (status = 200, body = Vec<RarePlantListing>)
    ),
)]
pub async fn search_rare_plants(
    State(state): State<AppState>,
    Query(params): Query<SearchRarePlantsQuery>,
) -> Result<Response<Vec<RarePlantListing>>, ApiError> {
    let listings = state
        .service
        .search_rare_plants(SearchRarePlantsInput {
            query: params.query,
            location: params.location,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(listings))
}
