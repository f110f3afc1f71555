use crate::domain::{
    assistant::knowledge::CareTopicIndex, compatibility::catalog::CompatibilityCatalog,
    diagnosis::knowledge::HealthIssueCatalog, identification::ports::VisionClient,
    rare_plants::catalog::RarePlantCatalog, seasonal::guide::SeasonalCareGuide,
};

/// Aggregate service holding the vision client and the static knowledge
/// catalogs. All catalogs are built once and read-only afterwards; they are
/// injected here rather than accessed as globals so tests can substitute
/// fixtures.
#[derive(Debug, Clone)]
pub struct Service<V>
where
    V: VisionClient,
{
    pub(crate) vision_client: V,
    pub(crate) health_catalog: HealthIssueCatalog,
    pub(crate) rare_plant_catalog: RarePlantCatalog,
    pub(crate) seasonal_guide: SeasonalCareGuide,
    pub(crate) care_topics: CareTopicIndex,
    pub(crate) compatibility_catalog: CompatibilityCatalog,
}

impl<V> Service<V>
where
    V: VisionClient,
{
    pub fn new(vision_client: V) -> Self {
        Self {
            vision_client,
            health_catalog: HealthIssueCatalog::builtin(),
            rare_plant_catalog: RarePlantCatalog::builtin(),
            seasonal_guide: SeasonalCareGuide::builtin(),
            care_topics: CareTopicIndex::builtin(),
            compatibility_catalog: CompatibilityCatalog::builtin(),
        }
    }
}
