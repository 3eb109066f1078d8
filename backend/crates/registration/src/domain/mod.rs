//! Domain Layer
//!
//! Contains the registration entity, value objects, and repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;
