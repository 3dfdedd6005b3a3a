//! Status CRUD.

use std::sync::Arc;

use tracing::info;

use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::traits::Repository;
use mottu_core::types::{PageRequest, PageSlice};
use mottu_entity::status::{Status, StatusData};

use crate::validation::ReferentialValidator;

/// Creates, lists, updates and removes statuses.
#[derive(Clone)]
pub struct StatusService {
    statuses: Arc<dyn Repository<Status>>,
    validator: Arc<ReferentialValidator>,
}

impl StatusService {
    /// Creates a new status service.
    pub fn new(
        statuses: Arc<dyn Repository<Status>>,
        validator: Arc<ReferentialValidator>,
    ) -> Self {
        Self {
            statuses,
            validator,
        }
    }

    /// One page of statuses ordered by id.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageSlice<Status>> {
        self.statuses.find_page(&[], page).await
    }

    /// Gets a single status by ID.
    pub async fn get(&self, id: i64) -> AppResult<Status> {
        self.statuses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Status {id} não encontrado")))
    }

    /// Creates a status inside an existing group.
    pub async fn create(&self, data: StatusData) -> AppResult<Status> {
        self.validator.check_status(&data).await?;
        let status = self.statuses.create(&data).await?;
        info!(
            status_id = status.id,
            status_grupo_id = status.status_grupo_id,
            "Status created"
        );
        Ok(status)
    }

    /// Replaces a status's name and group.
    pub async fn update(&self, id: i64, data: StatusData) -> AppResult<Status> {
        self.get(id).await?;
        self.validator.check_status(&data).await?;
        let status = self
            .statuses
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Status {id} não encontrado")))?;
        info!(status_id = id, "Status updated");
        Ok(status)
    }

    /// Removes a status no moto has.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get(id).await?;
        self.validator.guard_status_delete(id).await?;
        self.statuses.delete(id).await?;
        info!(status_id = id, "Status deleted");
        Ok(())
    }
}
