//! User management.

pub mod service;

pub use service::{UserInput, UserService};
