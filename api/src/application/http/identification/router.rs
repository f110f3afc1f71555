use super::handlers::identify_plant::{__path_identify_plant, identify_plant};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(identify_plant))]
pub struct IdentificationApiDoc;

pub fn identification_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/identify", state.args.server.root_path),
        post(identify_plant),
    )
}
