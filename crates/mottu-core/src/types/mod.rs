//! Core type definitions used across the Mottu Vision workspace.

pub mod filter;
pub mod link;
pub mod pagination;
pub mod table;

pub use filter::{FilterField, FilterOp, FilterValue};
pub use link::{Link, LinkOrigin};
pub use pagination::{ListPath, PageRequest, PageSlice, PagedResult};
pub use table::Table;
