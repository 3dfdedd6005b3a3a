//! Zone CRUD.

use std::sync::Arc;

use tracing::info;

use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::traits::Repository;
use mottu_core::types::{PageRequest, PageSlice};
use mottu_entity::zone::{Zone, ZoneData};

use crate::validation::ReferentialValidator;

/// Creates, lists, updates and removes zones.
#[derive(Clone)]
pub struct ZoneService {
    zones: Arc<dyn Repository<Zone>>,
    validator: Arc<ReferentialValidator>,
}

impl ZoneService {
    /// Creates a new zone service.
    pub fn new(zones: Arc<dyn Repository<Zone>>, validator: Arc<ReferentialValidator>) -> Self {
        Self { zones, validator }
    }

    /// One page of zones ordered by id.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageSlice<Zone>> {
        self.zones.find_page(&[], page).await
    }

    /// Gets a single zone by ID.
    pub async fn get(&self, id: i64) -> AppResult<Zone> {
        self.zones
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Zona {id} não encontrada")))
    }

    /// Creates a zone.
    pub async fn create(&self, data: ZoneData) -> AppResult<Zone> {
        self.validator.check_zone(&data)?;
        let zone = self.zones.create(&data).await?;
        info!(zone_id = zone.id, letra = %zone.letra, "Zone created");
        Ok(zone)
    }

    /// Replaces a zone's name and letter.
    pub async fn update(&self, id: i64, data: ZoneData) -> AppResult<Zone> {
        self.get(id).await?;
        self.validator.check_zone(&data)?;
        let zone = self
            .zones
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Zona {id} não encontrada")))?;
        info!(zone_id = id, "Zone updated");
        Ok(zone)
    }

    /// Removes a zone that no moto references.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get(id).await?;
        self.validator.guard_zone_delete(id).await?;
        self.zones.delete(id).await?;
        info!(zone_id = id, "Zone deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mottu_database::Repositories;

    use super::*;

    fn service() -> ZoneService {
        let repos = Repositories::memory();
        let validator = Arc::new(ReferentialValidator::new(repos.clone()));
        ZoneService::new(repos.zones, validator)
    }

    fn norte() -> ZoneData {
        ZoneData {
            nome: "Norte".into(),
            letra: "N".into(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = service();
        let created = service.create(norte()).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.nome, "Norte");
        assert_eq!(fetched.letra, "N");
    }

    #[tokio::test]
    async fn test_invalid_letter_is_rejected_without_insert() {
        let service = service();
        let err = service
            .create(ZoneData {
                nome: "Norte".into(),
                letra: "NN".into(),
            })
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.list(&PageRequest::default()).await.unwrap().total_count, 0);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_zone_is_not_found() {
        let service = service();
        assert!(service.update(7, norte()).await.unwrap_err().is_not_found());
        assert!(service.delete(7).await.unwrap_err().is_not_found());
    }
}
