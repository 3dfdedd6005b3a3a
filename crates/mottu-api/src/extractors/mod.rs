//! Custom Axum extractors.

pub mod json;
pub mod origin;
pub mod pagination;
pub mod path;

pub use json::ValidatedJson;
pub use origin::RequestOrigin;
pub use pagination::PaginationParams;
pub use path::parse_id;
