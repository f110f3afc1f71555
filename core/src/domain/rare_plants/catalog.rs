use crate::domain::rare_plants::entities::{Nursery, RarePlantListing, Rarity};

/// Built-in rare plant listings. A database would back this in a production
/// deployment; the POST surface is an echo stub accordingly.
#[derive(Debug, Clone)]
pub struct RarePlantCatalog {
    pub listings: Vec<RarePlantListing>,
}

fn nursery(name: &str, location: &str, available: bool) -> Nursery {
    Nursery {
        name: name.to_string(),
        location: location.to_string(),
        available,
    }
}

fn listing(
    id: &str,
    plant_name: &str,
    scientific_name: &str,
    rarity: Rarity,
    price: &str,
    nurseries: Vec<Nursery>,
) -> RarePlantListing {
    RarePlantListing {
        id: id.to_string(),
        plant_name: plant_name.to_string(),
        scientific_name: scientific_name.to_string(),
        rarity,
        price: price.to_string(),
        nurseries,
    }
}

impl RarePlantCatalog {
    pub fn builtin() -> Self {
        Self {
            listings: vec![
                listing(
                    "1",
                    "Variegated Monstera",
                    "Monstera deliciosa 'Variegata'",
                    Rarity::Rare,
                    "$250-500",
                    vec![
                        nursery("Rare Roots Nursery", "San Francisco, CA", true),
                        nursery("Leaf & Stem", "Oakland, CA", false),
                    ],
                ),
                listing(
                    "2",
                    "Pink Princess Philodendron",
                    "Philodendron erubescens 'Pink Princess'",
                    Rarity::Rare,
                    "$150-300",
                    vec![
                        nursery("Rare Roots Nursery", "San Francisco, CA", false),
                        nursery("Plant Haven", "Berkeley, CA", true),
                    ],
                ),
                listing(
                    "3",
                    "Thai Constellation",
                    "Monstera deliciosa 'Thai Constellation'",
                    Rarity::VeryRare,
                    "$350-700",
                    vec![nursery("Exotic Greens", "San Jose, CA", true)],
                ),
                listing(
                    "4",
                    "White Wizard Philodendron",
                    "Philodendron erubescens 'White Wizard'",
                    Rarity::VeryRare,
                    "$200-400",
                    vec![],
                ),
                listing(
                    "5",
                    "Monstera Obliqua",
                    "Monstera obliqua",
                    Rarity::Endangered,
                    "$800-1500",
                    vec![],
                ),
                listing(
                    "6",
                    "Philodendron Spiritus Sancti",
                    "Philodendron spiritus-sancti",
                    Rarity::Endangered,
                    "$5000+",
                    vec![],
                ),
            ],
        }
    }

    /// Case-insensitive substring search over plant and scientific names.
    /// An absent query returns the full catalog.
    pub fn search(&self, query: Option<&str>) -> Vec<RarePlantListing> {
        match query {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                self.listings
                    .iter()
                    .filter(|listing| {
                        listing.plant_name.to_lowercase().contains(&query)
                            || listing.scientific_name.to_lowercase().contains(&query)
                    })
                    .cloned()
                    .collect()
            }
            _ => self.listings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monstera_query_matches_name_and_scientific_name() {
        let catalog = RarePlantCatalog::builtin();
        let results = catalog.search(Some("monstera"));
        let names: Vec<&str> = results.iter().map(|l| l.plant_name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Variegated Monstera", "Thai Constellation", "Monstera Obliqua"]
        );
        assert!(!names.contains(&"Pink Princess Philodendron"));
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = RarePlantCatalog::builtin();
        assert_eq!(catalog.search(Some("MONSTERA")).len(), 3);
    }

    #[test]
    fn absent_or_empty_query_returns_everything() {
        let catalog = RarePlantCatalog::builtin();
        assert_eq!(catalog.search(None).len(), 6);
        assert_eq!(catalog.search(Some("")).len(), 6);
    }
}
