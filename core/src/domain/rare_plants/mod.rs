pub mod catalog;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
