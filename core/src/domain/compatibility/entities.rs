use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    High,
    Medium,
    Low,
    Incompatible,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareNeeds {
    pub light: String,
    pub water: String,
    pub soil: String,
    pub humidity: String,
}

/// How well a companion plant shares growing conditions with the user's
/// current plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantComparison {
    pub plant_name: String,
    pub scientific_name: String,
    pub compatibility: Compatibility,
    pub reasons: Vec<String>,
    pub care_needs: CareNeeds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub comparisons: Vec<PlantComparison>,
    pub suggested_plants: Vec<String>,
}
