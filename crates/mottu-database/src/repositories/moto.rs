//! Moto repository.

use mottu_entity::moto::{Moto, MotoData};

use super::pg::{PgRecord, PgRepository, SqlValue};

/// Repository for the `moto` table.
pub type MotoRepository = PgRepository<Moto>;

impl PgRecord for Moto {
    const FILTER_COLUMNS: &'static [&'static str] = &[
        "id", "placa", "chassi", "qr_code", "zona_id", "patio_id", "status_id",
    ];

    fn columns(data: &MotoData) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("placa", SqlValue::Text(data.placa.clone())),
            ("chassi", SqlValue::Text(data.chassi.clone())),
            ("qr_code", SqlValue::OptText(data.qr_code.clone())),
            ("data_entrada", SqlValue::Timestamp(data.data_entrada)),
            ("previsao_entrega", SqlValue::OptTimestamp(data.previsao_entrega)),
            ("fotos", SqlValue::OptText(data.fotos.clone())),
            ("zona_id", SqlValue::BigInt(data.zona_id)),
            ("patio_id", SqlValue::BigInt(data.patio_id)),
            ("status_id", SqlValue::BigInt(data.status_id)),
            ("observacoes", SqlValue::OptText(data.observacoes.clone())),
        ]
    }
}
