use crate::domain::diagnosis::entities::{HealthIssue, Severity};

/// Built-in table of common plant health issues, grouped by category.
/// Constructed once at service creation and read-only afterwards.
#[derive(Debug, Clone)]
pub struct HealthIssueCatalog {
    pub leaf_spots: Vec<HealthIssue>,
    pub pests: Vec<HealthIssue>,
    pub watering_issues: Vec<HealthIssue>,
    pub nutrient_deficiencies: Vec<HealthIssue>,
}

fn issue(
    id: &str,
    name: &str,
    description: &str,
    severity: Severity,
    symptoms: &[&str],
    treatment: &[&str],
    prevention_tips: &[&str],
) -> HealthIssue {
    HealthIssue {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        severity,
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        treatment: treatment.iter().map(|s| s.to_string()).collect(),
        prevention_tips: prevention_tips.iter().map(|s| s.to_string()).collect(),
    }
}

impl HealthIssueCatalog {
    pub fn builtin() -> Self {
        Self {
            leaf_spots: vec![
                issue(
                    "leaf_spot_1",
                    "Fungal Leaf Spot",
                    "Fungal infection causing brown spots with yellow halos",
                    Severity::Medium,
                    &[
                        "Brown spots with yellow halos",
                        "Spots may merge into larger lesions",
                        "Affected leaves eventually turn yellow and drop",
                    ],
                    &[
                        "Remove and destroy affected leaves",
                        "Apply fungicide according to package directions",
                        "Ensure good air circulation around plants",
                        "Avoid overhead watering",
                    ],
                    &[
                        "Water at the base of the plant",
                        "Space plants properly for good air circulation",
                        "Clean up fallen leaves and plant debris",
                        "Use disease-resistant varieties when possible",
                    ],
                ),
                issue(
                    "leaf_spot_2",
                    "Bacterial Leaf Spot",
                    "Bacterial infection causing water-soaked spots that turn brown or black",
                    Severity::Medium,
                    &[
                        "Water-soaked spots that turn brown or black",
                        "Spots may have yellow halos",
                        "Spots may appear angular, limited by leaf veins",
                        "Leaves may develop holes as infected tissue dies and falls out",
                    ],
                    &[
                        "Remove and destroy affected leaves",
                        "Apply copper-based bactericide",
                        "Avoid overhead watering",
                        "Provide good air circulation",
                    ],
                    &[
                        "Use disease-free seeds and plants",
                        "Rotate crops in vegetable gardens",
                        "Avoid working with plants when they're wet",
                        "Disinfect garden tools between uses",
                    ],
                ),
            ],
            pests: vec![
                issue(
                    "pest_1",
                    "Spider Mites",
                    "Tiny pests that cause stippling on leaves and fine webbing",
                    Severity::High,
                    &[
                        "Fine webbing on undersides of leaves",
                        "Tiny specks moving on the leaf surface",
                        "Yellow or bronze stippling on leaves",
                        "Leaves may curl, dry, and fall off",
                    ],
                    &[
                        "Spray plants with strong stream of water",
                        "Apply insecticidal soap or neem oil",
                        "For severe infestations, use miticide",
                        "Repeat treatments every 7-10 days",
                    ],
                    &[
                        "Increase humidity around plants",
                        "Regularly inspect plants for early signs",
                        "Keep plants healthy and well-watered",
                        "Introduce beneficial predators like ladybugs",
                    ],
                ),
                issue(
                    "pest_2",
                    "Aphids",
                    "Small soft-bodied insects that cluster on new growth and undersides of leaves",
                    Severity::Medium,
                    &[
                        "Clusters of small insects on stems or leaf undersides",
                        "Sticky honeydew on leaves or surfaces below",
                        "Curled, distorted, or yellowing leaves",
                        "Stunted growth",
                    ],
                    &[
                        "Spray with strong stream of water",
                        "Apply insecticidal soap or neem oil",
                        "Introduce beneficial insects like ladybugs",
                        "For severe cases, use systemic insecticide",
                    ],
                    &[
                        "Regularly inspect plants",
                        "Avoid excessive nitrogen fertilizer",
                        "Keep area free of weeds that may harbor aphids",
                        "Use reflective mulch in vegetable gardens",
                    ],
                ),
                issue(
                    "pest_3",
                    "Mealybugs",
                    "White, cottony insects that cluster in leaf axils and undersides",
                    Severity::Medium,
                    &[
                        "White, cottony masses in leaf axils or undersides",
                        "Sticky honeydew and sooty mold",
                        "Yellowing leaves",
                        "Stunted or distorted growth",
                    ],
                    &[
                        "Remove with cotton swab dipped in alcohol",
                        "Apply insecticidal soap or neem oil",
                        "For severe infestations, use systemic insecticide",
                        "Repeat treatments weekly until controlled",
                    ],
                    &[
                        "Inspect new plants before bringing indoors",
                        "Avoid overwatering and overfertilizing",
                        "Maintain good air circulation",
                        "Quarantine affected plants",
                    ],
                ),
            ],
            watering_issues: vec![
                issue(
                    "water_1",
                    "Overwatering",
                    "Excessive water causing root rot and yellowing leaves",
                    Severity::High,
                    &[
                        "Yellowing leaves throughout the plant",
                        "Soft, mushy stems near soil line",
                        "Wilting despite moist soil",
                        "Moldy soil surface",
                    ],
                    &[
                        "Reduce watering frequency",
                        "Ensure pot has drainage holes",
                        "Repot in fresh, well-draining soil if necessary",
                        "Remove affected roots when repotting",
                    ],
                    &[
                        "Water only when top inch of soil is dry",
                        "Use well-draining soil mix",
                        "Choose pots with drainage holes",
                        "Adjust watering schedule seasonally",
                    ],
                ),
                issue(
                    "water_2",
                    "Underwatering",
                    "Insufficient water causing wilting and dry, crispy leaves",
                    Severity::Medium,
                    &[
                        "Dry, crispy leaf edges or tips",
                        "Wilting or drooping",
                        "Slow growth",
                        "Soil pulling away from sides of pot",
                    ],
                    &[
                        "Water thoroughly until water drains from bottom",
                        "For severely dry soil, soak pot in water for 30 minutes",
                        "Trim away dead, crispy leaves",
                        "Establish regular watering schedule",
                    ],
                    &[
                        "Check soil moisture regularly",
                        "Use reminder app for watering schedule",
                        "Consider self-watering pots for consistent moisture",
                        "Adjust watering frequency based on season and environment",
                    ],
                ),
            ],
            nutrient_deficiencies: vec![
                issue(
                    "nutrient_1",
                    "Nitrogen Deficiency",
                    "Lack of nitrogen causing yellowing of older leaves",
                    Severity::Medium,
                    &[
                        "Yellowing of older, lower leaves",
                        "Stunted growth",
                        "Pale green color throughout plant",
                        "Early leaf drop",
                    ],
                    &[
                        "Apply balanced fertilizer with higher first number (N-P-K)",
                        "For quick results, use water-soluble nitrogen fertilizer",
                        "Add compost or organic matter to soil",
                        "Follow package directions for application rates",
                    ],
                    &[
                        "Regular fertilizing during growing season",
                        "Use slow-release fertilizers for consistent feeding",
                        "Add compost to soil annually",
                        "Avoid overwatering which can leach nutrients",
                    ],
                ),
                issue(
                    "nutrient_2",
                    "Iron Chlorosis",
                    "Iron deficiency causing yellowing leaves with green veins",
                    Severity::Medium,
                    &[
                        "Yellowing leaves with green veins (interveinal chlorosis)",
                        "Symptoms appear on new growth first",
                        "Stunted growth",
                        "In severe cases, leaves may turn white and drop",
                    ],
                    &[
                        "Apply iron chelate or iron sulfate to soil",
                        "For quick results, use foliar spray with iron",
                        "Adjust soil pH if too high (alkaline)",
                        "In containers, repot with fresh soil containing iron",
                    ],
                    &[
                        "Test and maintain proper soil pH (most plants prefer 6.0-7.0)",
                        "Use acidifying fertilizers for acid-loving plants",
                        "Add organic matter to improve nutrient availability",
                        "Avoid overwatering which can lead to poor nutrient uptake",
                    ],
                ),
            ],
        }
    }
}
