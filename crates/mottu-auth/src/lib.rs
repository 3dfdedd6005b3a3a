//! # mottu-auth
//!
//! Credential handling for Mottu Vision. User passwords are stored as
//! Argon2id PHC strings and never returned by the API.

pub mod password;

pub use password::PasswordHasher;
