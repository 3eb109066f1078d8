//! Application Layer
//!
//! Use cases and application services.

pub mod builder;
pub mod config;
pub mod register;
