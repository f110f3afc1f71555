pub mod create_rare_plant_alert;
pub mod search_rare_plants;
