use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use floralens_core::domain::compatibility::{
    entities::CompatibilityReport, ports::CompatibilityService,
    value_objects::CheckCompatibilityInput,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CheckCompatibilityQuery {
    /// Companion plant name; omit to list all known pairings.
    pub plant: Option<String>,
}

#[utoipa::path(
    get,
    path = "/compatibility",
    tag = "compatibility",
    summary = "Check companion plant compatibility",
    description = "Returns pairing comparisons and suggested companion plants",
    params(CheckCompatibilityQuery),
    responses(
        (status = 200, body = CompatibilityReport)
    ),
)]
pub async fn check_compatibility(
    State(state): State<AppState>,
    Query(params): Query<CheckCompatibilityQuery>,
) -> Result<Response<CompatibilityReport>, ApiError> {
    let report = state
        .service
        .check_compatibility(CheckCompatibilityInput {
            plant: params.plant,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
