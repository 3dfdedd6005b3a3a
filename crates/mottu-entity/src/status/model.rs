//! Status entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mottu_core::traits::Record;
use mottu_core::types::{FilterValue, Table};

/// A motorcycle status, belonging to exactly one [`super::StatusGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// Sequential identifier.
    pub id: i64,
    /// Display name.
    pub nome: String,
    /// Owning status group.
    pub status_grupo_id: i64,
}

/// Writable columns of a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusData {
    /// Display name.
    pub nome: String,
    /// Owning status group.
    pub status_grupo_id: i64,
}

impl Record for Status {
    type Data = StatusData;
    const TABLE: Table = Table::Status;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_data(id: i64, data: &StatusData) -> Self {
        Self {
            id,
            nome: data.nome.clone(),
            status_grupo_id: data.status_grupo_id,
        }
    }

    fn field(&self, column: &str) -> Option<FilterValue> {
        match column {
            "id" => Some(self.id.into()),
            "nome" => Some(self.nome.clone().into()),
            "status_grupo_id" => Some(self.status_grupo_id.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_group_id_camel_case() {
        let status = Status::from_data(
            3,
            &StatusData {
                nome: "Sinistro".into(),
                status_grupo_id: 2,
            },
        );
        let json = serde_json::to_value(&status).expect("serialize");
        assert_eq!(json["statusGrupoId"], 2);
        assert_eq!(json["id"], 3);
    }
}
