use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confidence reported when the model omits a score. A product choice
/// carried over from the original UI, not derived from any model property.
pub const DEFAULT_CONFIDENCE: f64 = 95.0;

/// Free-form display attribute (family, origin, growth rate, toxicity).
/// Order is display order only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareInstruction {
    pub category: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
}

/// Normalized identification result returned to clients. Only constructible
/// from a schema-valid payload; see [`PlantRecord::from_payload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub plant_name: String,
    pub scientific_name: String,
    /// Score in the 0-100 range by convention. The upstream model does not
    /// guarantee the range, so the value is passed through as-is.
    pub confidence: f64,
    pub details: Vec<PlantDetail>,
    pub tags: Vec<String>,
    pub care_instructions: Vec<CareInstruction>,
}

/// Payload exactly as parsed from the model text. Optional fields stay
/// optional here; defaults are applied by the identification service, never
/// by the extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantPayload {
    #[serde(default)]
    pub plant_name: String,
    #[serde(default)]
    pub scientific_name: String,
    pub confidence: Option<f64>,
    pub details: Option<Vec<PlantDetail>>,
    pub tags: Option<Vec<String>>,
    pub care_instructions: Option<Vec<CareInstruction>>,
}

/// Fallback attributes shown when the model returns no `details`.
pub fn default_details() -> Vec<PlantDetail> {
    [
        ("Family", "Araceae"),
        ("Origin", "Southern Mexico & Panama"),
        ("Growth Rate", "Moderate to fast"),
        ("Toxicity", "Toxic to pets"),
    ]
    .into_iter()
    .map(|(label, value)| PlantDetail {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

/// Fallback tags shown when the model returns no `tags`.
pub fn default_tags() -> Vec<String> {
    ["Tropical", "Indoor", "Air Purifying"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl PlantRecord {
    /// Builds the client-facing record, filling documented defaults for
    /// fields the model omitted. Missing care instructions stay empty; the
    /// UI falls back on its own.
    pub fn from_payload(payload: PlantPayload) -> Self {
        Self {
            plant_name: payload.plant_name,
            scientific_name: payload.scientific_name,
            confidence: payload.confidence.unwrap_or(DEFAULT_CONFIDENCE),
            details: payload.details.unwrap_or_else(default_details),
            tags: payload.tags.unwrap_or_else(default_tags),
            care_instructions: payload.care_instructions.unwrap_or_default(),
        }
    }
}
