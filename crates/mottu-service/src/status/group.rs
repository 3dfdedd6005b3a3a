//! Status group CRUD.

use std::sync::Arc;

use tracing::info;

use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::traits::Repository;
use mottu_core::types::{PageRequest, PageSlice};
use mottu_entity::status::{StatusGroup, StatusGroupData};

use crate::validation::ReferentialValidator;

/// Creates, lists, updates and removes status groups.
#[derive(Clone)]
pub struct StatusGroupService {
    groups: Arc<dyn Repository<StatusGroup>>,
    validator: Arc<ReferentialValidator>,
}

impl StatusGroupService {
    /// Creates a new status group service.
    pub fn new(
        groups: Arc<dyn Repository<StatusGroup>>,
        validator: Arc<ReferentialValidator>,
    ) -> Self {
        Self { groups, validator }
    }

    /// One page of groups ordered by id.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageSlice<StatusGroup>> {
        self.groups.find_page(&[], page).await
    }

    /// Gets a single group by ID.
    pub async fn get(&self, id: i64) -> AppResult<StatusGroup> {
        self.groups
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("StatusGrupo {id} não encontrado")))
    }

    /// Creates a group.
    pub async fn create(&self, data: StatusGroupData) -> AppResult<StatusGroup> {
        self.validator.check_name(&data.nome)?;
        let group = self.groups.create(&data).await?;
        info!(status_grupo_id = group.id, "Status group created");
        Ok(group)
    }

    /// Renames a group.
    pub async fn update(&self, id: i64, data: StatusGroupData) -> AppResult<StatusGroup> {
        self.get(id).await?;
        self.validator.check_name(&data.nome)?;
        let group = self
            .groups
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("StatusGrupo {id} não encontrado")))?;
        info!(status_grupo_id = id, "Status group updated");
        Ok(group)
    }

    /// Removes a group that holds no statuses.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get(id).await?;
        self.validator.guard_status_group_delete(id).await?;
        self.groups.delete(id).await?;
        info!(status_grupo_id = id, "Status group deleted");
        Ok(())
    }
}
