//! Status group repository.

use mottu_entity::status::{StatusGroup, StatusGroupData};

use super::pg::{PgRecord, PgRepository, SqlValue};

/// Repository for the `status_grupo` table.
pub type StatusGroupRepository = PgRepository<StatusGroup>;

impl PgRecord for StatusGroup {
    const FILTER_COLUMNS: &'static [&'static str] = &["id", "nome"];

    fn columns(data: &StatusGroupData) -> Vec<(&'static str, SqlValue)> {
        vec![("nome", SqlValue::Text(data.nome.clone()))]
    }
}
