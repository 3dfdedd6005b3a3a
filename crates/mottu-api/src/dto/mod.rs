//! Data transfer objects for the HTTP API.

pub mod request;
pub mod response;

pub use request::{
    MotoRequest, PatioRequest, StatusGrupoRequest, StatusRequest, UsuarioRequest, ZonaRequest,
};
pub use response::HealthResponse;
