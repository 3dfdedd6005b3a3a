//! Zone entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mottu_core::traits::Record;
use mottu_core::types::{FilterValue, Table};

/// A letter-coded area of the fleet map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Sequential identifier.
    pub id: i64,
    /// Display name.
    pub nome: String,
    /// Single-letter code.
    pub letra: String,
}

/// Writable columns of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneData {
    /// Display name.
    pub nome: String,
    /// Single-letter code.
    pub letra: String,
}

impl Record for Zone {
    type Data = ZoneData;
    const TABLE: Table = Table::Zona;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_data(id: i64, data: &ZoneData) -> Self {
        Self {
            id,
            nome: data.nome.clone(),
            letra: data.letra.clone(),
        }
    }

    fn field(&self, column: &str) -> Option<FilterValue> {
        match column {
            "id" => Some(self.id.into()),
            "nome" => Some(self.nome.clone().into()),
            "letra" => Some(self.letra.clone().into()),
            _ => None,
        }
    }
}
