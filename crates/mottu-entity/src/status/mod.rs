//! Status and status group entities.

pub mod group;
pub mod model;

pub use group::{StatusGroup, StatusGroupData};
pub use model::{Status, StatusData};
