pub mod entities;
pub mod knowledge;
pub mod matcher;
pub mod ports;
pub mod services;
pub mod value_objects;
