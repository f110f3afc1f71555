use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    Rare,
    VeryRare,
    Endangered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Nursery {
    pub name: String,
    pub location: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RarePlantListing {
    pub id: String,
    pub plant_name: String,
    pub scientific_name: String,
    pub rarity: Rarity,
    pub price: String,
    pub nurseries: Vec<Nursery>,
}
