//! Domain Layer
//!
//! Profile and history entities, value objects, pure planning services,
//! and the ports implemented by the infrastructure layer.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
