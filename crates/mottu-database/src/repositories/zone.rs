//! Zone repository.

use mottu_entity::zone::{Zone, ZoneData};

use super::pg::{PgRecord, PgRepository, SqlValue};

/// Repository for the `zona` table.
pub type ZoneRepository = PgRepository<Zone>;

impl PgRecord for Zone {
    const FILTER_COLUMNS: &'static [&'static str] = &["id", "nome", "letra"];

    fn columns(data: &ZoneData) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("nome", SqlValue::Text(data.nome.clone())),
            ("letra", SqlValue::Text(data.letra.clone())),
        ]
    }
}
