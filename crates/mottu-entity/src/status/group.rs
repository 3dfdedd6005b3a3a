//! Status group entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mottu_core::traits::Record;
use mottu_core::types::{FilterValue, Table};

/// A named group of statuses (e.g. "Operacional", "Exceção").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StatusGroup {
    /// Sequential identifier.
    pub id: i64,
    /// Display name.
    pub nome: String,
}

/// Writable columns of a status group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGroupData {
    /// Display name.
    pub nome: String,
}

impl Record for StatusGroup {
    type Data = StatusGroupData;
    const TABLE: Table = Table::StatusGrupo;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_data(id: i64, data: &StatusGroupData) -> Self {
        Self {
            id,
            nome: data.nome.clone(),
        }
    }

    fn field(&self, column: &str) -> Option<FilterValue> {
        match column {
            "id" => Some(self.id.into()),
            "nome" => Some(self.nome.clone().into()),
            _ => None,
        }
    }
}
