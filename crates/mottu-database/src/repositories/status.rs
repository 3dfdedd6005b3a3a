//! Status repository.

use mottu_entity::status::{Status, StatusData};

use super::pg::{PgRecord, PgRepository, SqlValue};

/// Repository for the `status` table.
pub type StatusRepository = PgRepository<Status>;

impl PgRecord for Status {
    const FILTER_COLUMNS: &'static [&'static str] = &["id", "nome", "status_grupo_id"];

    fn columns(data: &StatusData) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("nome", SqlValue::Text(data.nome.clone())),
            ("status_grupo_id", SqlValue::BigInt(data.status_grupo_id)),
        ]
    }
}
