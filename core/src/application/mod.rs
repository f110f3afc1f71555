use crate::{
    domain::common::{FloraLensConfig, services::Service},
    infrastructure::llm::gemini_client::GeminiVisionClient,
};

pub type FloraLensService = Service<GeminiVisionClient>;

/// Wires the Gemini vision client and the built-in knowledge catalogs into
/// a ready-to-serve service.
pub fn create_service(config: FloraLensConfig) -> FloraLensService {
    let vision_client =
        GeminiVisionClient::new(config.llm.gemini_api_key, config.llm.gemini_model);

    Service::new(vision_client)
}
