//! Referential validation for writes and deletion guards.
//!
//! Every check returns a [`ErrorKind::Validation`] error carrying one of
//! the user-facing messages in [`messages`]. Checks run in a fixed order
//! and the first failure wins.
//!
//! [`ErrorKind::Validation`]: mottu_core::error::ErrorKind::Validation

use tracing::debug;

use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::types::FilterField;
use mottu_database::Repositories;
use mottu_entity::{MotoData, StatusData, ZoneData};

/// User-facing validation messages.
pub mod messages {
    /// Moto references a missing zone.
    pub const INVALID_ZONE: &str = "ZonaId inválido.";
    /// Moto references a missing yard.
    pub const INVALID_YARD: &str = "PatioId inválido.";
    /// Moto references a missing status.
    pub const INVALID_STATUS: &str = "StatusId inválido.";
    /// Status references a missing group.
    pub const INVALID_STATUS_GROUP: &str = "StatusGrupoId inválido.";
    /// Plate already used by another moto.
    pub const DUPLICATE_PLATE: &str = "Placa já cadastrada.";
    /// Chassis already used by another moto.
    pub const DUPLICATE_CHASSIS: &str = "Chassi já cadastrado.";
    /// Blank name.
    pub const NAME_REQUIRED: &str = "Nome obrigatório.";
    /// Blank zone name or letter that is not exactly one character.
    pub const INVALID_ZONE_FIELDS: &str = "Nome obrigatório e Letra deve ter 1 caractere.";
    /// Username taken (create).
    pub const USER_EXISTS: &str = "Usuário já existe.";
    /// Username taken by another row (update).
    pub const USER_NAME_TAKEN: &str = "Já existe outro usuário com esse nome.";
    /// Yard still referenced by motos.
    pub const YARD_HAS_MOTOS: &str = "Não é possível remover pátio com motos associadas.";
    /// Zone still referenced by motos.
    pub const ZONE_HAS_MOTOS: &str = "Não é possível remover zona com motos associadas.";
    /// Status group still referenced by statuses.
    pub const STATUS_GROUP_HAS_STATUSES: &str =
        "Não é possível remover StatusGrupo que contém Statuses.";
    /// Status still referenced by motos.
    pub const STATUS_HAS_MOTOS: &str = "Não é possível remover Status com motos associadas.";
}

fn reject(message: &'static str) -> AppError {
    debug!(message, "Validation rejected write");
    AppError::validation(message)
}

fn by_id(id: i64) -> [FilterField; 1] {
    [FilterField::eq("id", id)]
}

/// Filters matching `column = value`, excluding row `exclude` when set.
fn unique_filters(column: &str, value: &str, exclude: Option<i64>) -> Vec<FilterField> {
    let mut filters = vec![FilterField::eq(column, value)];
    if let Some(id) = exclude {
        filters.push(FilterField::ne("id", id));
    }
    filters
}

/// Checks cross-table constraints before a write is committed.
#[derive(Clone)]
pub struct ReferentialValidator {
    repos: Repositories,
}

impl ReferentialValidator {
    /// Create a validator over the given repositories.
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Zone, yard and status exist; plate and chassis are unique.
    ///
    /// `exclude` is the id of the moto being updated, so it does not
    /// collide with itself.
    pub async fn check_moto(&self, data: &MotoData, exclude: Option<i64>) -> AppResult<()> {
        if !self.repos.zones.exists(&by_id(data.zona_id)).await? {
            return Err(reject(messages::INVALID_ZONE));
        }
        if !self.repos.yards.exists(&by_id(data.patio_id)).await? {
            return Err(reject(messages::INVALID_YARD));
        }
        if !self.repos.statuses.exists(&by_id(data.status_id)).await? {
            return Err(reject(messages::INVALID_STATUS));
        }
        if self
            .repos
            .motos
            .exists(&unique_filters("placa", &data.placa, exclude))
            .await?
        {
            return Err(reject(messages::DUPLICATE_PLATE));
        }
        if self
            .repos
            .motos
            .exists(&unique_filters("chassi", &data.chassi, exclude))
            .await?
        {
            return Err(reject(messages::DUPLICATE_CHASSIS));
        }
        Ok(())
    }

    /// Name is present and the status group exists.
    pub async fn check_status(&self, data: &StatusData) -> AppResult<()> {
        check_name(&data.nome)?;
        if !self
            .repos
            .status_groups
            .exists(&by_id(data.status_grupo_id))
            .await?
        {
            return Err(reject(messages::INVALID_STATUS_GROUP));
        }
        Ok(())
    }

    /// Name is present and the letter is exactly one character.
    pub fn check_zone(&self, data: &ZoneData) -> AppResult<()> {
        if data.nome.trim().is_empty() || data.letra.chars().count() != 1 {
            return Err(reject(messages::INVALID_ZONE_FIELDS));
        }
        Ok(())
    }

    /// Name is present. Used by yards and status groups.
    pub fn check_name(&self, nome: &str) -> AppResult<()> {
        check_name(nome)
    }

    /// No user other than `exclude` has this username.
    pub async fn check_username(&self, usuario: &str, exclude: Option<i64>) -> AppResult<()> {
        if self
            .repos
            .users
            .exists(&unique_filters("usuario", usuario, exclude))
            .await?
        {
            return Err(reject(match exclude {
                None => messages::USER_EXISTS,
                Some(_) => messages::USER_NAME_TAKEN,
            }));
        }
        Ok(())
    }

    /// A yard can be removed only when no moto is parked in it.
    pub async fn guard_yard_delete(&self, id: i64) -> AppResult<()> {
        if self
            .repos
            .motos
            .exists(&[FilterField::eq("patio_id", id)])
            .await?
        {
            return Err(reject(messages::YARD_HAS_MOTOS));
        }
        Ok(())
    }

    /// A zone can be removed only when no moto references it.
    pub async fn guard_zone_delete(&self, id: i64) -> AppResult<()> {
        if self
            .repos
            .motos
            .exists(&[FilterField::eq("zona_id", id)])
            .await?
        {
            return Err(reject(messages::ZONE_HAS_MOTOS));
        }
        Ok(())
    }

    /// A status group can be removed only when it has no statuses.
    pub async fn guard_status_group_delete(&self, id: i64) -> AppResult<()> {
        if self
            .repos
            .statuses
            .exists(&[FilterField::eq("status_grupo_id", id)])
            .await?
        {
            return Err(reject(messages::STATUS_GROUP_HAS_STATUSES));
        }
        Ok(())
    }

    /// A status can be removed only when no moto has it.
    pub async fn guard_status_delete(&self, id: i64) -> AppResult<()> {
        if self
            .repos
            .motos
            .exists(&[FilterField::eq("status_id", id)])
            .await?
        {
            return Err(reject(messages::STATUS_HAS_MOTOS));
        }
        Ok(())
    }
}

fn check_name(nome: &str) -> AppResult<()> {
    if nome.trim().is_empty() {
        return Err(reject(messages::NAME_REQUIRED));
    }
    Ok(())
}
