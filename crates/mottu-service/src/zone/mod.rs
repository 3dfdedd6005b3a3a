//! Zone management.

pub mod service;

pub use service::ZoneService;
