//! Yard (pátio) management.

pub mod service;

pub use service::YardService;
