/// Instruction sent to the vision model with every identification request.
///
/// The JSON structure described here is a prompt-level contract only; the
/// model is free to wrap its answer in markdown fencing or prose, which is
/// why extraction is tolerant (see [`crate::domain::identification::extractor`]).
pub const IDENTIFY_PLANT_PROMPT: &str = r#"Identify this plant and provide detailed care instructions including watering needs, sunlight requirements, and soil preferences. Format the response as JSON with the following structure: {"plantName": string, "scientificName": string, "confidence": number, "details": [{"label": string, "value": string}], "tags": [string], "careInstructions": [{"category": string, "value": string, "description": string}]}"#;
