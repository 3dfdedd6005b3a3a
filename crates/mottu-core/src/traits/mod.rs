//! Core traits defined in `mottu-core` and implemented by other crates.

pub mod repository;

pub use repository::{Record, Repository};
