//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Injectable entropy sources backed by the OS CSPRNG
//! - Opaque random token generation (lowercase hex)
//! - Password hashing (Argon2id, self-describing PHC strings)

pub mod crypto;
pub mod password;
pub mod token;
