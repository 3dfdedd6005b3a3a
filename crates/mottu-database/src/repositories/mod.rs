//! SQL repository implementations for all Mottu Vision entities.
//!
//! [`PgRepository`] implements the generic CRUD trait once; each entity
//! module describes its table through [`PgRecord`].

pub mod moto;
pub mod pg;
pub mod status;
pub mod status_group;
pub mod user;
pub mod yard;
pub mod zone;

pub use moto::MotoRepository;
pub use pg::{PgRecord, PgRepository, SqlValue};
pub use status::StatusRepository;
pub use status_group::StatusGroupRepository;
pub use user::UserRepository;
pub use yard::YardRepository;
pub use zone::ZoneRepository;
