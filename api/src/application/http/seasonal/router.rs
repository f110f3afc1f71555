use super::handlers::get_seasonal_care::{__path_get_seasonal_care, get_seasonal_care};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_seasonal_care))]
pub struct SeasonalApiDoc;

pub fn seasonal_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/seasonal-care", state.args.server.root_path),
        get(get_seasonal_care),
    )
}
