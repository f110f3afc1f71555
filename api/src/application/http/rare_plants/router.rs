use super::handlers::{
    create_rare_plant_alert::{__path_create_rare_plant_alert, create_rare_plant_alert},
    search_rare_plants::{__path_search_rare_plants, search_rare_plants},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_rare_plants, create_rare_plant_alert))]
pub struct RarePlantsApiDoc;

pub fn rare_plant_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/rare-plants", state.args.server.root_path),
        get(search_rare_plants).post(create_rare_plant_alert),
    )
}
