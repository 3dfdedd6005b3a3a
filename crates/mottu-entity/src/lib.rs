//! # mottu-entity
//!
//! Domain entity models for Mottu Vision. Every struct in this crate
//! represents a database table row or the writable part of one. Row
//! structs derive `sqlx::FromRow` and implement
//! [`mottu_core::traits::Record`], so the same model works with the SQL
//! repositories and the in-memory store.
//!
//! Relations are plain foreign-key fields. Joined views such as
//! [`moto::MotoDetails`] are assembled on demand by the service layer.

pub mod moto;
pub mod status;
pub mod user;
pub mod yard;
pub mod zone;

pub use moto::{Moto, MotoData, MotoDetails};
pub use status::{Status, StatusData, StatusGroup, StatusGroupData};
pub use user::{User, UserData};
pub use yard::{Yard, YardData};
pub use zone::{Zone, ZoneData};
