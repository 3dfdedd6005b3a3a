//! Zone entity.

pub mod model;

pub use model::{Zone, ZoneData};
