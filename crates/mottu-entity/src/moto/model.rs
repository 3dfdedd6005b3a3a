//! Motorcycle entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mottu_core::traits::Record;
use mottu_core::types::{FilterValue, Table};

/// A motorcycle tracked by the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Moto {
    /// Sequential identifier.
    pub id: i64,
    /// License plate, unique across motos.
    pub placa: String,
    /// Chassis number, unique across motos.
    pub chassi: String,
    /// QR code printed on the bike.
    pub qr_code: Option<String>,
    /// When the bike entered the yard.
    pub data_entrada: DateTime<Utc>,
    /// Expected delivery date.
    pub previsao_entrega: Option<DateTime<Utc>>,
    /// Photo reference.
    pub fotos: Option<String>,
    /// Zone the bike is parked in.
    pub zona_id: i64,
    /// Yard the bike is parked in.
    pub patio_id: i64,
    /// Current status.
    pub status_id: i64,
    /// Free-form notes.
    pub observacoes: Option<String>,
}

/// Writable columns of a moto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotoData {
    /// License plate.
    pub placa: String,
    /// Chassis number.
    pub chassi: String,
    /// QR code.
    pub qr_code: Option<String>,
    /// Entry timestamp.
    pub data_entrada: DateTime<Utc>,
    /// Expected delivery date.
    pub previsao_entrega: Option<DateTime<Utc>>,
    /// Photo reference.
    pub fotos: Option<String>,
    /// Zone id.
    pub zona_id: i64,
    /// Yard id.
    pub patio_id: i64,
    /// Status id.
    pub status_id: i64,
    /// Free-form notes.
    pub observacoes: Option<String>,
}

impl Record for Moto {
    type Data = MotoData;
    const TABLE: Table = Table::Moto;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_data(id: i64, data: &MotoData) -> Self {
        Self {
            id,
            placa: data.placa.clone(),
            chassi: data.chassi.clone(),
            qr_code: data.qr_code.clone(),
            data_entrada: data.data_entrada,
            previsao_entrega: data.previsao_entrega,
            fotos: data.fotos.clone(),
            zona_id: data.zona_id,
            patio_id: data.patio_id,
            status_id: data.status_id,
            observacoes: data.observacoes.clone(),
        }
    }

    fn field(&self, column: &str) -> Option<FilterValue> {
        match column {
            "id" => Some(self.id.into()),
            "placa" => Some(self.placa.clone().into()),
            "chassi" => Some(self.chassi.clone().into()),
            "qr_code" => self.qr_code.clone().map(Into::into),
            "zona_id" => Some(self.zona_id.into()),
            "patio_id" => Some(self.patio_id.into()),
            "status_id" => Some(self.status_id.into()),
            _ => None,
        }
    }
}
