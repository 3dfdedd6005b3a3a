//! Yard repository.

use mottu_entity::yard::{Yard, YardData};

use super::pg::{PgRecord, PgRepository, SqlValue};

/// Repository for the `patio` table.
pub type YardRepository = PgRepository<Yard>;

impl PgRecord for Yard {
    const FILTER_COLUMNS: &'static [&'static str] = &["id", "nome"];

    fn columns(data: &YardData) -> Vec<(&'static str, SqlValue)> {
        vec![("nome", SqlValue::Text(data.nome.clone()))]
    }
}
