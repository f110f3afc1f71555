use super::handlers::check_compatibility::{__path_check_compatibility, check_compatibility};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(check_compatibility))]
pub struct CompatibilityApiDoc;

pub fn compatibility_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/compatibility", state.args.server.root_path),
        get(check_compatibility),
    )
}
