use crate::application::http::{
    assistant::router::AssistantApiDoc, compatibility::router::CompatibilityApiDoc,
    diagnosis::router::DiagnosisApiDoc, health::HealthApiDoc,
    identification::router::IdentificationApiDoc, rare_plants::router::RarePlantsApiDoc,
    seasonal::router::SeasonalApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FloraLens API"
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        BaseApiDoc::openapi()
            .nest("", IdentificationApiDoc::openapi())
            .nest("", DiagnosisApiDoc::openapi())
            .nest("", RarePlantsApiDoc::openapi())
            .nest("", SeasonalApiDoc::openapi())
            .nest("", AssistantApiDoc::openapi())
            .nest("", CompatibilityApiDoc::openapi())
            .nest("", HealthApiDoc::openapi())
    }
}
