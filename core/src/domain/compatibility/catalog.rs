use crate::domain::compatibility::entities::{CareNeeds, Compatibility, PlantComparison};

/// Built-in companion-planting comparisons, relative to a tropical aroid
/// baseline, plus the suggestion list shown in the picker.
#[derive(Debug, Clone)]
pub struct CompatibilityCatalog {
    pub comparisons: Vec<PlantComparison>,
    pub suggested_plants: Vec<String>,
}

fn comparison(
    plant_name: &str,
    scientific_name: &str,
    compatibility: Compatibility,
    reasons: &[&str],
    light: &str,
    water: &str,
    soil: &str,
    humidity: &str,
) -> PlantComparison {
    PlantComparison {
        plant_name: plant_name.to_string(),
        scientific_name: scientific_name.to_string(),
        compatibility,
        reasons: reasons.iter().map(|s| s.to_string()).collect(),
        care_needs: CareNeeds {
            light: light.to_string(),
            water: water.to_string(),
            soil: soil.to_string(),
            humidity: humidity.to_string(),
        },
    }
}

impl CompatibilityCatalog {
    pub fn builtin() -> Self {
        Self {
            comparisons: vec![
                comparison(
                    "Pothos",
                    "Epipremnum aureum",
                    Compatibility::High,
                    &[
                        "Similar light requirements",
                        "Similar watering needs",
                        "Both tropical plants that enjoy humidity",
                    ],
                    "Medium to bright indirect light",
                    "Allow top 1-2 inches of soil to dry out",
                    "Well-draining potting mix",
                    "Moderate to high",
                ),
                comparison(
                    "Peace Lily",
                    "Spathiphyllum",
                    Compatibility::Medium,
                    &[
                        "Similar humidity requirements",
                        "Peace Lily needs more frequent watering",
                        "Both enjoy filtered light",
                    ],
                    "Low to medium indirect light",
                    "Keep soil consistently moist",
                    "Rich, well-draining potting mix",
                    "High",
                ),
                comparison(
                    "Snake Plant",
                    "Sansevieria trifasciata",
                    Compatibility::Low,
                    &[
                        "Snake plant prefers drier conditions",
                        "Different watering schedules can lead to problems",
                        "Snake plant tolerates lower light",
                    ],
                    "Low to bright indirect light",
                    "Allow soil to dry completely",
                    "Well-draining, sandy soil",
                    "Low to moderate",
                ),
                comparison(
                    "Cactus",
                    "Various species",
                    Compatibility::Incompatible,
                    &[
                        "Completely different watering needs",
                        "Cacti need much more light",
                        "Cacti prefer low humidity while Monstera needs high humidity",
                    ],
                    "Bright direct light",
                    "Infrequent, allow to dry completely",
                    "Sandy, extremely well-draining",
                    "Very low",
                ),
            ],
            suggested_plants: [
                "Philodendron",
                "Pothos",
                "Peace Lily",
                "Fern",
                "Calathea",
                "Spider Plant",
                "Snake Plant",
                "Cactus",
                "Aloe Vera",
                "ZZ Plant",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    /// Case-insensitive substring filter on companion or scientific name.
    /// An absent query returns every comparison.
    pub fn search(&self, plant: Option<&str>) -> Vec<PlantComparison> {
        match plant {
            Some(plant) if !plant.is_empty() => {
                let plant = plant.to_lowercase();
                self.comparisons
                    .iter()
                    .filter(|comparison| {
                        comparison.plant_name.to_lowercase().contains(&plant)
                            || comparison.scientific_name.to_lowercase().contains(&plant)
                    })
                    .cloned()
                    .collect()
            }
            _ => self.comparisons.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_name_returns_only_that_companion() {
        let catalog = CompatibilityCatalog::builtin();
        let results = catalog.search(Some("pothos"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].plant_name, "Pothos");
        assert_eq!(results[0].compatibility, Compatibility::High);
    }

    #[test]
    fn absent_query_returns_all_comparisons() {
        let catalog = CompatibilityCatalog::builtin();
        assert_eq!(catalog.search(None).len(), 4);
    }
}
