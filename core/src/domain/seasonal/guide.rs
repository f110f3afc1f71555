use crate::domain::seasonal::entities::{Season, SeasonalCareEntry};

/// Built-in seasonal care adjustments, one entry per season.
#[derive(Debug, Clone)]
pub struct SeasonalCareGuide {
    pub entries: Vec<SeasonalCareEntry>,
}

fn entry(
    season: Season,
    watering: &str,
    light: &str,
    fertilizing: &str,
    tips: &[&str],
) -> SeasonalCareEntry {
    SeasonalCareEntry {
        season,
        watering: watering.to_string(),
        light: light.to_string(),
        fertilizing: fertilizing.to_string(),
        tips: tips.iter().map(|s| s.to_string()).collect(),
    }
}

impl SeasonalCareGuide {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                entry(
                    Season::Spring,
                    "Increase watering frequency as growth accelerates. Water when the top 2 inches of soil are dry.",
                    "Move closer to windows to take advantage of increasing sunlight, but avoid direct afternoon sun.",
                    "Begin monthly fertilizing with a balanced houseplant fertilizer at half strength.",
                    &[
                        "Spring is the ideal time for repotting if needed",
                        "Clean leaves to remove dust and improve photosynthesis",
                        "Watch for new growth and adjust care accordingly",
                        "Begin acclimating to outdoor conditions if you plan to move outside for summer",
                    ],
                ),
                entry(
                    Season::Summer,
                    "Water more frequently as temperatures rise. Check soil moisture every 3-4 days.",
                    "Protect from intense direct sunlight which can scorch leaves. Filter light through sheer curtains if needed.",
                    "Continue monthly fertilizing. Consider using a slightly higher nitrogen formula to support active growth.",
                    &[
                        "Increase humidity by misting or using a humidifier during dry, hot periods",
                        "Watch for signs of heat stress like curling leaves",
                        "Rotate the plant regularly for even growth",
                        "Consider moving away from air conditioning vents which can dry out plants",
                    ],
                ),
                entry(
                    Season::Fall,
                    "Reduce watering frequency as growth slows. Allow soil to dry out more between waterings.",
                    "Move to brighter locations as daylight hours decrease. Clean windows to maximize light penetration.",
                    "Reduce fertilizing to every 6-8 weeks or stop completely by late fall.",
                    &[
                        "Bring outdoor plants inside before temperatures drop below 55°F (13°C)",
                        "Check for pests before bringing plants indoors",
                        "Clean leaves and inspect for issues before winter",
                        "Begin acclimating to indoor conditions if moving from outdoors",
                    ],
                ),
                entry(
                    Season::Winter,
                    "Water sparingly, allowing soil to dry out completely between waterings. Overwatering in winter is a common issue.",
                    "Move to the brightest available location. Consider supplemental grow lights during short winter days.",
                    "Stop fertilizing or reduce to quarterly at 1/4 strength until spring.",
                    &[
                        "Keep away from cold drafts and heat sources like radiators",
                        "Increase humidity with humidifiers or pebble trays as indoor heating dries the air",
                        "Dust leaves regularly to maximize light absorption",
                        "Don't repot during winter dormancy period",
                    ],
                ),
            ],
        }
    }

    pub fn for_season(&self, season: Season) -> Option<&SeasonalCareEntry> {
        self.entries.iter().find(|entry| entry.season == season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_season_has_an_entry() {
        let guide = SeasonalCareGuide::builtin();
        for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
            let entry = guide.for_season(season).unwrap();
            assert_eq!(entry.season, season);
            assert!(!entry.tips.is_empty());
        }
    }
}
