//! Yard entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mottu_core::traits::Record;
use mottu_core::types::{FilterValue, Table};

/// A yard where motorcycles are parked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Yard {
    /// Sequential identifier.
    pub id: i64,
    /// Display name.
    pub nome: String,
}

/// Writable columns of a yard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardData {
    /// Display name.
    pub nome: String,
}

impl Record for Yard {
    type Data = YardData;
    const TABLE: Table = Table::Patio;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_data(id: i64, data: &YardData) -> Self {
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
