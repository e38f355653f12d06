pub mod errors;
pub mod value_objects;
pub mod entities;
pub mod factories;
pub mod repositories;
pub mod services;
