//! Motorcycle entity and its joined view.

pub mod details;
pub mod model;

pub use details::MotoDetails;
pub use model::{Moto, MotoData};
