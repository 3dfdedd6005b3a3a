//! Yard (pátio) entity.

pub mod model;

pub use model::{Yard, YardData};
