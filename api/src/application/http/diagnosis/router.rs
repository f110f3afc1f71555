use super::handlers::diagnose_plant::{__path_diagnose_plant, diagnose_plant};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(diagnose_plant))]
pub struct DiagnosisApiDoc;

pub fn diagnosis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/diagnose", state.args.server.root_path),
        post(diagnose_plant),
    )
}
