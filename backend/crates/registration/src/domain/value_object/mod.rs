//! Value Object Module

pub mod registration_token;
pub mod user_password;
