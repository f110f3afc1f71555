pub mod assistant;
pub mod compatibility;
pub mod diagnosis;
pub mod health;
pub mod identification;
pub mod rare_plants;
pub mod seasonal;
pub mod server;
