//! Request DTOs with validation.
//!
//! Field names follow the public camelCase wire format. Length limits are
//! checked here, before any service call; blank names and referential
//! rules are left to the services.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use mottu_entity::{MotoData, StatusData, StatusGroupData, YardData, ZoneData};
use mottu_service::UserInput;

/// Create or replace a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioRequest {
    /// Login name.
    #[validate(length(min = 3, max = 50, message = "Usuário deve ter entre 3 e 50 caracteres."))]
    pub usuario: String,
    /// Plaintext password.
    #[validate(length(min = 4, max = 255, message = "Senha deve ter entre 4 e 255 caracteres."))]
    pub senha: String,
}

impl From<UsuarioRequest> for UserInput {
    fn from(req: UsuarioRequest) -> Self {
        Self {
            usuario: req.usuario,
            senha: req.senha,
        }
    }
}

/// Create or replace a zone.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ZonaRequest {
    /// Zone name.
    #[validate(length(max = 50, message = "Nome deve ter no máximo 50 caracteres."))]
    pub nome: String,
    /// Single-letter code.
    #[validate(length(equal = 1, message = "Nome obrigatório e Letra deve ter 1 caractere."))]
    pub letra: String,
}

impl From<ZonaRequest> for ZoneData {
    fn from(req: ZonaRequest) -> Self {
        Self {
            nome: req.nome,
            letra: req.letra,
        }
    }
}

/// Create or replace a yard.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatioRequest {
    /// Yard name.
    #[validate(length(max = 200, message = "Nome deve ter no máximo 200 caracteres."))]
    pub nome: String,
}

impl From<PatioRequest> for YardData {
    fn from(req: PatioRequest) -> Self {
        Self { nome: req.nome }
    }
}

/// Create or replace a status group.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusGrupoRequest {
    /// Group name.
    #[validate(length(max = 200, message = "Nome deve ter no máximo 200 caracteres."))]
    pub nome: String,
}

impl From<StatusGrupoRequest> for StatusGroupData {
    fn from(req: StatusGrupoRequest) -> Self {
        Self { nome: req.nome }
    }
}

/// Create or replace a status.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    /// Status name.
    #[validate(length(max = 200, message = "Nome deve ter no máximo 200 caracteres."))]
    pub nome: String,
    /// Owning group.
    pub status_grupo_id: i64,
}

impl From<StatusRequest> for StatusData {
    fn from(req: StatusRequest) -> Self {
        Self {
            nome: req.nome,
            status_grupo_id: req.status_grupo_id,
        }
    }
}

/// Create or replace a moto.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MotoRequest {
    /// License plate.
    #[validate(length(min = 1, max = 10, message = "Placa deve ter entre 1 e 10 caracteres."))]
    pub placa: String,
    /// Chassis number.
    #[validate(length(min = 1, max = 20, message = "Chassi deve ter entre 1 e 20 caracteres."))]
    pub chassi: String,
    /// QR code printed on the moto.
    #[serde(default)]
    #[validate(length(max = 255, message = "QrCode deve ter no máximo 255 caracteres."))]
    pub qr_code: Option<String>,
    /// When the moto entered the yard.
    #[serde(deserialize_with = "timestamp")]
    pub data_entrada: DateTime<Utc>,
    /// Expected delivery.
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub previsao_entrega: Option<DateTime<Utc>>,
    /// Photo reference.
    #[serde(default)]
    #[validate(length(max = 255, message = "Fotos deve ter no máximo 255 caracteres."))]
    pub fotos: Option<String>,
    /// Zone id.
    pub zona_id: i64,
    /// Yard id.
    pub patio_id: i64,
    /// Status id.
    pub status_id: i64,
    /// Free-form notes.
    #[serde(default)]
    pub observacoes: Option<String>,
}

impl From<MotoRequest> for MotoData {
    fn from(req: MotoRequest) -> Self {
        Self {
            placa: req.placa,
            chassi: req.chassi,
            qr_code: req.qr_code,
            data_entrada: req.data_entrada,
            previsao_entrega: req.previsao_entrega,
            fotos: req.fotos,
            zona_id: req.zona_id,
            patio_id: req.patio_id,
            status_id: req.status_id,
            observacoes: req.observacoes,
        }
    }
}

/// RFC 3339, or a bare `YYYY-MM-DDTHH:MM:SS[.f]` read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn timestamp<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(de)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

fn optional_timestamp<'de, D: Deserializer<'de>>(
    de: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<String>::deserialize(de)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
    }
}
