//! # mottu-core
//!
//! Core crate for Mottu Vision. Contains the configuration schema, the
//! unified error system, pagination and HATEOAS link types, dynamic filter
//! types, and the generic repository trait implemented by the storage
//! backends.
//!
//! This crate has **no** internal dependencies on other Mottu crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
