//! Moto joined with its zone, yard and status.

use serde::{Deserialize, Serialize};

use super::model::Moto;
use crate::status::Status;
use crate::yard::Yard;
use crate::zone::Zone;

/// A moto with its referenced rows embedded, as returned by reads.
///
/// The references are optional because nothing fences a referenced row
/// from being removed between the moto read and the join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoDetails {
    /// The moto row itself, inlined.
    #[serde(flatten)]
    pub moto: Moto,
    /// Referenced zone.
    pub zona: Option<Zone>,
    /// Referenced yard.
    pub patio: Option<Yard>,
    /// Referenced status.
    pub status: Option<Status>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_flattens_moto_fields() {
        let details = MotoDetails {
            moto: Moto {
                id: 1,
                placa: "ABC1D23".into(),
                chassi: "9BWZZZ377VT004251".into(),
                qr_code: Some("QR001".into()),
                data_entrada: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
                previsao_entrega: None,
                fotos: None,
                zona_id: 1,
                patio_id: 1,
                status_id: 1,
                observacoes: None,
            },
            zona: Some(Zone {
                id: 1,
                nome: "Norte".into(),
                letra: "N".into(),
            }),
            patio: None,
            status: None,
        };
        let json = serde_json::to_value(&details).expect("serialize");
        assert_eq!(json["placa"], "ABC1D23");
        assert_eq!(json["qrCode"], "QR001");
        assert_eq!(json["zonaId"], 1);
        assert_eq!(json["zona"]["letra"], "N");
        assert!(json["patio"].is_null());
        assert!(json.get("moto").is_none());
    }
}
