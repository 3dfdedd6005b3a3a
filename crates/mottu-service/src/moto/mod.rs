//! Motorcycle management.

pub mod service;

pub use service::MotoService;
