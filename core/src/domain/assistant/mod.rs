pub mod knowledge;
pub mod ports;
pub mod services;
pub mod value_objects;
