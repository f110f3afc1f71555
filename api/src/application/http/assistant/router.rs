use super::handlers::ask_assistant::{__path_ask_assistant, ask_assistant};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(ask_assistant))]
pub struct AssistantApiDoc;

pub fn assistant_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/assistant", state.args.server.root_path),
        post(ask_assistant),
    )
}
