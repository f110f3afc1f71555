#[derive(Debug, Clone)]
pub struct IdentifyPlantInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
}
