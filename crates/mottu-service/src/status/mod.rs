//! Status and status group management.

pub mod group;
pub mod service;

pub use group::StatusGroupService;
pub use service::StatusService;
