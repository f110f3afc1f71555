pub mod assistant;
pub mod common;
pub mod compatibility;
pub mod diagnosis;
pub mod identification;
pub mod rare_plants;
pub mod seasonal;
