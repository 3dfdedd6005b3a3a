//! User repository.

use mottu_entity::user::{User, UserData};

use super::pg::{PgRecord, PgRepository, SqlValue};

/// Repository for the `usuario` table.
pub type UserRepository = PgRepository<User>;

impl PgRecord for User {
    const FILTER_COLUMNS: &'static [&'static str] = &["id", "usuario"];

    fn columns(data: &UserData) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("usuario", SqlValue::Text(data.usuario.clone())),
            ("senha_hash", SqlValue::Text(data.senha_hash.clone())),
        ]
    }
}
