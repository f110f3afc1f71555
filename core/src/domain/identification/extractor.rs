use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    common::entities::app_errors::CoreError, identification::entities::PlantPayload,
};

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\n(.*?)\n```").expect("valid regex"));
static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid regex"));

/// Locates and parses the JSON object embedded in raw model text.
///
/// Candidates are tried in priority order, first match wins:
/// 1. a fenced block explicitly tagged `json`,
/// 2. any fenced block,
/// 3. the whole text (models that skip fencing entirely).
///
/// Fails closed: invalid JSON or a missing/empty `plantName` is an error
/// carrying the raw text for diagnostics, never a partially guessed record.
/// Defaults for optional fields are the caller's job.
pub fn extract_plant_payload(raw_text: &str) -> Result<PlantPayload, CoreError> {
    let candidate = JSON_FENCE
        .captures(raw_text)
        .or_else(|| ANY_FENCE.captures(raw_text))
        .and_then(|captures| captures.get(1))
        .map_or(raw_text, |m| m.as_str())
        .trim();

    let payload: PlantPayload = serde_json::from_str(candidate).map_err(|e| {
        tracing::error!("Failed to parse plant identification payload: {}", e);
        CoreError::InvalidModelJson {
            raw_response: raw_text.to_string(),
            reason: e.to_string(),
        }
    })?;

    if payload.plant_name.trim().is_empty() {
        return Err(CoreError::PlantSchemaViolation {
            raw_response: raw_text.to_string(),
            reason: "plantName is missing or empty".to_string(),
        });
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_json_tagged_fence_and_ignores_prose() {
        let raw = "Here is the plant I found:\n```json\n{\"plantName\": \"Monstera Deliciosa\"}\n```\nLet me know if you need more.";
        let payload = extract_plant_payload(raw).unwrap();
        assert_eq!(payload.plant_name, "Monstera Deliciosa");
    }

    #[test]
    fn json_tagged_fence_wins_over_generic_fence() {
        let raw = "```\nnot the payload\n```\n```json\n{\"plantName\": \"Pothos\"}\n```";
        let payload = extract_plant_payload(raw).unwrap();
        assert_eq!(payload.plant_name, "Pothos");
    }

    #[test]
    fn falls_back_to_generic_fence() {
        let raw = "```\n{\"plantName\": \"Snake Plant\", \"confidence\": 88}\n```";
        let payload = extract_plant_payload(raw).unwrap();
        assert_eq!(payload.plant_name, "Snake Plant");
        assert_eq!(payload.confidence, Some(88.0));
    }

    #[test]
    fn parses_bare_text_without_fencing() {
        let raw = "  {\"plantName\": \"Peace Lily\", \"scientificName\": \"Spathiphyllum\"}  ";
        let payload = extract_plant_payload(raw).unwrap();
        assert_eq!(payload.plant_name, "Peace Lily");
        assert_eq!(payload.scientific_name, "Spathiphyllum");
    }

    #[test]
    fn invalid_json_fails_with_raw_text_attached() {
        let raw = "The plant appears to be a fern, but I cannot say which.";
        match extract_plant_payload(raw) {
            Err(CoreError::InvalidModelJson { raw_response, .. }) => {
                assert_eq!(raw_response, raw);
            }
            other => panic!("expected InvalidModelJson, got {:?}", other),
        }
    }

    #[test]
    fn missing_plant_name_is_a_schema_violation() {
        let raw = "```json\n{\"scientificName\": \"Ficus lyrata\"}\n```";
        assert!(matches!(
            extract_plant_payload(raw),
            Err(CoreError::PlantSchemaViolation { .. })
        ));
    }

    #[test]
    fn empty_plant_name_is_a_schema_violation() {
        let raw = "{\"plantName\": \"   \"}";
        assert!(matches!(
            extract_plant_payload(raw),
            Err(CoreError::PlantSchemaViolation { .. })
        ));
    }

    #[test]
    fn parses_full_payload_shape() {
        let raw = r#"```json
{
  "plantName": "Fiddle Leaf Fig",
  "scientificName": "Ficus lyrata",
  "confidence": 97,
  "details": [{"label": "Family", "value": "Moraceae"}],
  "tags": ["Indoor"],
  "careInstructions": [
    {"category": "Watering", "value": "Weekly", "description": "Let topsoil dry out."}
  ]
}
```"#;
        let payload = extract_plant_payload(raw).unwrap();
        assert_eq!(payload.confidence, Some(97.0));
        assert_eq!(payload.details.as_ref().unwrap().len(), 1);
        assert_eq!(payload.tags.as_ref().unwrap(), &["Indoor"]);
        assert_eq!(
            payload.care_instructions.as_ref().unwrap()[0].category,
            "Watering"
        );
    }
}
