/// Keyword-triggered care answer.
#[derive(Debug, Clone)]
pub struct CareTopic {
    pub keywords: Vec<String>,
    pub response: String,
}

/// Built-in plant care Q&A snippets plus species-specific overrides for a
/// few common houseplants.
#[derive(Debug, Clone)]
pub struct CareTopicIndex {
    pub topics: Vec<CareTopic>,
    pub fallback: String,
}

fn topic(keywords: &[&str], response: &str) -> CareTopic {
    CareTopic {
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        response: response.to_string(),
    }
}

impl CareTopicIndex {
    pub fn builtin() -> Self {
        Self {
            topics: vec![
                topic(
                    &["water", "watering", "overwater", "underwater"],
                    "Most houseplants should be watered when the top inch of soil feels dry. Succulents and cacti need less frequent watering, while tropical plants may need more. Always check the soil moisture before watering.",
                ),
                topic(
                    &["light", "sunlight", "bright", "shade", "window"],
                    "Different plants have different light requirements. Most houseplants prefer bright, indirect light. Direct sunlight can burn leaves, while too little light can cause leggy growth and fewer leaves.",
                ),
                topic(
                    &["fertilize", "fertilizer", "feed", "nutrients"],
                    "Most houseplants benefit from fertilizing during the growing season (spring and summer). Use a balanced houseplant fertilizer at half the recommended strength every 4-6 weeks.",
                ),
                topic(
                    &["repot", "repotting", "pot", "container"],
                    "Repot plants when they become root-bound, typically every 1-2 years. Choose a pot that's 1-2 inches larger in diameter than the current one, and use fresh potting soil.",
                ),
                topic(
                    &["pest", "bugs", "insects", "mites", "aphids", "spider"],
                    "Common houseplant pests include spider mites, aphids, and mealybugs. Treat with insecticidal soap, neem oil, or by wiping leaves with a mild soap solution. Regularly inspect plants to catch infestations early.",
                ),
                topic(
                    &["yellow", "brown", "spots", "wilting", "drooping"],
                    "Yellowing leaves often indicate overwatering, while brown tips suggest underwatering or low humidity. Spots could be sunburn or fungal issues. Wilting may be due to water stress or root problems.",
                ),
                topic(
                    &["humidity", "mist", "dry air"],
                    "Many tropical plants prefer higher humidity. Increase humidity by misting, using a humidifier, placing plants on pebble trays with water, or grouping plants together.",
                ),
                topic(
                    &["temperature", "cold", "hot", "draft"],
                    "Most houseplants prefer temperatures between 65-75°F (18-24°C). Avoid placing plants near drafty windows, doors, or heating/cooling vents, as sudden temperature changes can stress plants.",
                ),
                topic(
                    &["propagate", "propagation", "cutting", "divide"],
                    "Many plants can be propagated through stem cuttings placed in water or soil. Some plants can be divided at the roots. Spring and summer are usually the best times for propagation.",
                ),
                topic(
                    &["soil", "potting mix", "medium"],
                    "Use well-draining potting mix appropriate for your plant type. Succulents need sandy, fast-draining soil, while tropical plants prefer richer soil that retains some moisture.",
                ),
            ],
            fallback: "I'm not sure about that specific plant care question. Try asking about watering, light requirements, fertilizing, pests, or common plant problems.".to_string(),
        }
    }

    /// Answers a care question. Resolution order: species-specific reply
    /// when a plant name is given, keyword topics, small talk, fallback.
    pub fn answer(&self, question: &str, plant_name: Option<&str>) -> String {
        let query = question.to_lowercase();

        if let Some(plant_name) = plant_name
            && let Some(specific) = plant_specific_answer(&query, plant_name)
        {
            return specific.to_string();
        }

        for topic in &self.topics {
            if topic
                .keywords
                .iter()
                .any(|keyword| query.contains(keyword.as_str()))
            {
                return topic.response.clone();
            }
        }

        if ["hello", "hi", "hey"].iter().any(|g| query.contains(g)) {
            return "Hello! How can I help with your plants today?".to_string();
        }

        if query.contains("thank") {
            return "You're welcome! Feel free to ask if you have any other plant care questions."
                .to_string();
        }

        if query.contains("who are you") || query.contains("what are you") {
            return "I'm your plant care voice assistant. I can answer questions about plant care, maintenance, and troubleshooting common issues.".to_string();
        }

        self.fallback.clone()
    }
}

fn plant_specific_answer(query: &str, plant_name: &str) -> Option<&'static str> {
    let plant_name = plant_name.to_lowercase();

    if plant_name.contains("monstera") {
        if query.contains("water") {
            return Some(
                "Water your Monstera when the top 2-3 inches of soil are dry. This is typically every 1-2 weeks, but may vary based on your home's conditions.",
            );
        }
        if query.contains("light") {
            return Some(
                "Monsteras prefer bright, indirect light. They can tolerate some direct morning sun but should be protected from harsh afternoon sunlight.",
            );
        }
    }

    if plant_name.contains("snake plant") || plant_name.contains("sansevieria") {
        if query.contains("water") {
            return Some(
                "Snake plants are drought-tolerant. Water only when the soil is completely dry, typically every 3-4 weeks. Overwatering is the most common issue with these plants.",
            );
        }
        if query.contains("light") {
            return Some(
                "Snake plants are adaptable to various light conditions, from low light to bright indirect light. They can even tolerate some direct sun.",
            );
        }
    }

    if plant_name.contains("pothos") || plant_name.contains("devil's ivy") {
        if query.contains("water") {
            return Some(
                "Water your Pothos when the top inch of soil is dry. They're quite forgiving and can bounce back from occasional underwatering.",
            );
        }
        if query.contains("light") {
            return Some(
                "Pothos can adapt to various light conditions, from low light to bright indirect light. However, they grow faster and have more variegation in brighter conditions.",
            );
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watering_question_hits_the_watering_topic() {
        let index = CareTopicIndex::builtin();
        let answer = index.answer("How often should I water this?", None);
        assert!(answer.starts_with("Most houseplants should be watered"));
    }

    #[test]
    fn plant_specific_answer_wins_over_the_generic_topic() {
        let index = CareTopicIndex::builtin();
        let answer = index.answer("How often should I water it?", Some("Monstera Deliciosa"));
        assert!(answer.starts_with("Water your Monstera"));
    }

    #[test]
    fn unrelated_plant_falls_through_to_the_generic_topic() {
        let index = CareTopicIndex::builtin();
        let answer = index.answer("How much light does it need?", Some("Calathea"));
        assert!(answer.starts_with("Different plants have different light requirements"));
    }

    #[test]
    fn greeting_gets_a_greeting() {
        let index = CareTopicIndex::builtin();
        assert_eq!(
            index.answer("hello", None),
            "Hello! How can I help with your plants today?"
        );
    }

    #[test]
    fn unknown_question_gets_the_fallback() {
        let index = CareTopicIndex::builtin();
        let answer = index.answer("quantum", None);
        assert_eq!(answer, index.fallback);
    }
}
