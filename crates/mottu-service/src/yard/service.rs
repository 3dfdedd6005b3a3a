//! Yard CRUD.

use std::sync::Arc;

use tracing::info;

use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::traits::Repository;
use mottu_core::types::{PageRequest, PageSlice};
use mottu_entity::yard::{Yard, YardData};

use crate::validation::ReferentialValidator;

/// Creates, lists, updates and removes yards.
#[derive(Clone)]
pub struct YardService {
    yards: Arc<dyn Repository<Yard>>,
    validator: Arc<ReferentialValidator>,
}

impl YardService {
    /// Creates a new yard service.
    pub fn new(yards: Arc<dyn Repository<Yard>>, validator: Arc<ReferentialValidator>) -> Self {
        Self { yards, validator }
    }

    /// One page of yards ordered by id.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageSlice<Yard>> {
        self.yards.find_page(&[], page).await
    }

    /// Gets a single yard by ID.
    pub async fn get(&self, id: i64) -> AppResult<Yard> {
        self.yards
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Pátio {id} não encontrado")))
    }

    /// Creates a yard.
    pub async fn create(&self, data: YardData) -> AppResult<Yard> {
        self.validator.check_name(&data.nome)?;
        let yard = self.yards.create(&data).await?;
        info!(patio_id = yard.id, "Yard created");
        Ok(yard)
    }

    /// Renames a yard.
    pub async fn update(&self, id: i64, data: YardData) -> AppResult<Yard> {
        self.get(id).await?;
        self.validator.check_name(&data.nome)?;
        let yard = self
            .yards
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Pátio {id} não encontrado")))?;
        info!(patio_id = id, "Yard updated");
        Ok(yard)
    }

    /// Removes an empty yard.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get(id).await?;
        self.validator.guard_yard_delete(id).await?;
        self.yards.delete(id).await?;
        info!(patio_id = id, "Yard deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mottu_database::Repositories;
    use mottu_entity::{MotoData, StatusData, StatusGroupData, ZoneData};

    use super::*;
    use crate::validation::messages;

    #[tokio::test]
    async fn test_delete_guard_keeps_yard_with_motos() {
        let repos = Repositories::memory();
        let validator = Arc::new(ReferentialValidator::new(repos.clone()));
        let service = YardService::new(Arc::clone(&repos.yards), validator);

        let yard = service
            .create(YardData {
                nome: "Pátio A".into(),
            })
            .await
            .unwrap();
        repos
            .zones
            .create(&ZoneData {
                nome: "Norte".into(),
                letra: "N".into(),
            })
            .await
            .unwrap();
        repos
            .status_groups
            .create(&StatusGroupData {
                nome: "Operacional".into(),
            })
            .await
            .unwrap();
        repos
            .statuses
            .create(&StatusData {
                nome: "OK".into(),
                status_grupo_id: 1,
            })
            .await
            .unwrap();
        let moto = repos
            .motos
            .create(&MotoData {
                placa: "ABC1D23".into(),
                chassi: "9BWZZZ377VT004251".into(),
                qr_code: None,
                data_entrada: Utc::now(),
                previsao_entrega: None,
                fotos: None,
                zona_id: 1,
                patio_id: yard.id,
                status_id: 1,
                observacoes: None,
            })
            .await
            .unwrap();

        let err = service.delete(yard.id).await.unwrap_err();
        assert_eq!(err.message, messages::YARD_HAS_MOTOS);
        assert!(service.get(yard.id).await.is_ok());

        repos.motos.delete(moto.id).await.unwrap();
        service.delete(yard.id).await.unwrap();
        assert!(service.get(yard.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let repos = Repositories::memory();
        let validator = Arc::new(ReferentialValidator::new(repos.clone()));
        let service = YardService::new(repos.yards, validator);
        let err = service
            .create(YardData { nome: "".into() })
            .await
            .unwrap_err();
        assert_eq!(err.message, messages::NAME_REQUIRED);
    }
}
