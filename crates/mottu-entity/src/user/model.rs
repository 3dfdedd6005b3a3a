//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mottu_core::traits::Record;
use mottu_core::types::{FilterValue, Table};

/// An application user.
///
/// Serializes as `{id, usuario}`; the password hash never leaves the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Sequential identifier.
    pub id: i64,
    /// Unique login name.
    pub usuario: String,
    /// Argon2 password hash (PHC string).
    #[serde(skip_serializing, default)]
    pub senha_hash: String,
}

/// Writable columns of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    /// Unique login name.
    pub usuario: String,
    /// Pre-hashed password.
    pub senha_hash: String,
}

impl Record for User {
    type Data = UserData;
    const TABLE: Table = Table::Usuario;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_data(id: i64, data: &UserData) -> Self {
        Self {
            id,
            usuario: data.usuario.clone(),
            senha_hash: data.senha_hash.clone(),
        }
    }

    fn field(&self, column: &str) -> Option<FilterValue> {
        match column {
            "id" => Some(self.id.into()),
            "usuario" => Some(self.usuario.clone().into()),
            _ => None,
        }
    }
}
