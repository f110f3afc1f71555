use crate::domain::diagnosis::{entities::HealthIssue, knowledge::HealthIssueCatalog};

/// Maximum number of issues surfaced per diagnosis.
pub const MAX_REPORTED_ISSUES: usize = 3;

const LEAF_SPOT_KEYWORDS: &[&str] = &["spot", "brown", "yellow spot"];
const PEST_KEYWORDS: &[&str] = &["web", "bug", "insect", "pest"];
const WATERING_KEYWORDS: &[&str] = &["wilt", "drooping", "overwater", "dry"];
const NUTRIENT_KEYWORDS: &[&str] = &["yellow leaf", "pale", "deficiency"];

fn group_matches(symptoms: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| symptoms.contains(keyword))
}

/// Maps free-text symptoms to known issues via substring keyword groups,
/// evaluated in fixed order (leaf spots, pests, watering, nutrients) which
/// doubles as the tie-break when several groups fire.
///
/// No match, including empty input, returns a fixed sampling (first
/// leaf-spot, first pest, first watering issue) so the caller always has
/// something to show. Deliberate policy, not an error.
pub fn match_symptoms(catalog: &HealthIssueCatalog, symptoms: &str) -> Vec<HealthIssue> {
    let symptoms = symptoms.to_lowercase();
    let mut detected: Vec<HealthIssue> = Vec::new();

    if group_matches(&symptoms, LEAF_SPOT_KEYWORDS) {
        detected.extend(catalog.leaf_spots.iter().cloned());
    }

    if group_matches(&symptoms, PEST_KEYWORDS) {
        detected.extend(catalog.pests.iter().cloned());
    }

    if group_matches(&symptoms, WATERING_KEYWORDS) {
        detected.extend(catalog.watering_issues.iter().cloned());
    }

    if group_matches(&symptoms, NUTRIENT_KEYWORDS) {
        detected.extend(catalog.nutrient_deficiencies.iter().cloned());
    }

    if detected.is_empty() {
        detected = [
            catalog.leaf_spots.first(),
            catalog.pests.first(),
            catalog.watering_issues.first(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    }

    detected.truncate(MAX_REPORTED_ISSUES);
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> HealthIssueCatalog {
        HealthIssueCatalog::builtin()
    }

    #[test]
    fn leaf_spot_symptoms_match_leaf_spot_issues_first() {
        let issues = match_symptoms(&catalog(), "yellow spot on leaf");
        assert_eq!(issues[0].id, "leaf_spot_1");
        assert_eq!(issues[1].id, "leaf_spot_2");
    }

    #[test]
    fn empty_input_returns_the_fixed_fallback_sampling() {
        let issues = match_symptoms(&catalog(), "");
        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["leaf_spot_1", "pest_1", "water_1"]);
    }

    #[test]
    fn unmatched_input_returns_the_fixed_fallback_sampling() {
        let issues = match_symptoms(&catalog(), "it just looks sad");
        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["leaf_spot_1", "pest_1", "water_1"]);
    }

    #[test]
    fn pest_symptoms_are_truncated_to_three() {
        let issues = match_symptoms(&catalog(), "my plant has aphids and spider web");
        assert_eq!(issues.len(), MAX_REPORTED_ISSUES);
        assert!(issues.iter().all(|i| i.id.starts_with("pest")));
    }

    #[test]
    fn leaf_spots_order_before_pests_when_both_groups_fire() {
        let issues = match_symptoms(&catalog(), "brown spot and some pest damage");
        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["leaf_spot_1", "leaf_spot_2", "pest_1"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let issues = match_symptoms(&catalog(), "WILTING badly");
        assert_eq!(issues[0].id, "water_1");
    }
}
