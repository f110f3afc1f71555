pub mod plant_record;

pub use plant_record::*;
