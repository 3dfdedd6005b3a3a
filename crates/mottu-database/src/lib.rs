//! # mottu-database
//!
//! Data store for Mottu Vision: the PostgreSQL connection pool, the SQL
//! migrations, the sequential id allocator, one repository per entity and
//! an in-memory store implementing the same repository trait.

pub mod connection;
pub mod id_allocator;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryRepository;
pub use store::{DataStore, Repositories};
