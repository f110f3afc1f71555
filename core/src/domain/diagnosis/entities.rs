use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthIssue {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub symptoms: Vec<String>,
    pub treatment: Vec<String>,
    pub prevention_tips: Vec<String>,
}
