/// Default plant type recorded when the client omits the field.
pub const DEFAULT_PLANT_TYPE: &str = "unknown";

#[derive(Debug, Clone)]
pub struct DiagnosePlantInput {
    pub image_data: Vec<u8>,
    pub plant_type: String,
    pub symptoms: String,
}
