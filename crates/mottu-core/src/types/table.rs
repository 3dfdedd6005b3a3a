//! Names of the persisted tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A table with its own sequential id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// Application users.
    Usuario,
    /// Zones (letter-coded areas).
    Zona,
    /// Yards.
    Patio,
    /// Status groups.
    StatusGrupo,
    /// Statuses.
    Status,
    /// Motorcycles.
    Moto,
}

impl Table {
    /// Every table, in dependency order (referenced tables first).
    pub const ALL: [Table; 6] = [
        Table::Usuario,
        Table::Zona,
        Table::Patio,
        Table::StatusGrupo,
        Table::Status,
        Table::Moto,
    ];

    /// SQL table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usuario => "usuario",
            Self::Zona => "zona",
            Self::Patio => "patio",
            Self::StatusGrupo => "status_grupo",
            Self::Status => "status",
            Self::Moto => "moto",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
