//! Moto CRUD and joined reads.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::traits::{Record, Repository};
use mottu_core::types::{FilterField, PageRequest, PageSlice};
use mottu_database::Repositories;
use mottu_entity::moto::{Moto, MotoData, MotoDetails};

use crate::validation::ReferentialValidator;

/// Creates, lists, updates and removes motos.
///
/// Reads return [`MotoDetails`], with the zone, yard and status joined
/// from their own tables.
#[derive(Clone)]
pub struct MotoService {
    repos: Repositories,
    validator: Arc<ReferentialValidator>,
}

/// Fetch a row once per id and remember the answer, including misses.
async fn lookup<E: Record>(
    repo: &dyn Repository<E>,
    cache: &mut HashMap<i64, Option<E>>,
    id: i64,
) -> AppResult<Option<E>> {
    if let Some(hit) = cache.get(&id) {
        return Ok(hit.clone());
    }
    let row = repo.find_by_id(id).await?;
    cache.insert(id, row.clone());
    Ok(row)
}

impl MotoService {
    /// Creates a new moto service.
    pub fn new(repos: Repositories, validator: Arc<ReferentialValidator>) -> Self {
        Self { repos, validator }
    }

    /// One page of motos ordered by id, optionally narrowed to plates
    /// containing `placa` (case-insensitive).
    pub async fn list(
        &self,
        page: &PageRequest,
        placa: Option<&str>,
    ) -> AppResult<PageSlice<MotoDetails>> {
        let filters: Vec<FilterField> = placa
            .filter(|p| !p.trim().is_empty())
            .map(|p| FilterField::contains("placa", p))
            .into_iter()
            .collect();

        let slice = self.repos.motos.find_page(&filters, page).await?;
        let items = self.join(slice.items).await?;
        Ok(PageSlice::new(items, slice.total_count))
    }

    /// Gets a single moto with its zone, yard and status.
    pub async fn get(&self, id: i64) -> AppResult<MotoDetails> {
        let moto = self.find(id).await?;
        let mut joined = self.join(vec![moto]).await?;
        joined
            .pop()
            .ok_or_else(|| AppError::internal("Joined moto went missing"))
    }

    /// Registers a moto.
    pub async fn create(&self, data: MotoData) -> AppResult<Moto> {
        self.validator.check_moto(&data, None).await?;
        let moto = self.repos.motos.create(&data).await?;
        info!(
            moto_id = moto.id,
            placa = %moto.placa,
            patio_id = moto.patio_id,
            "Moto created"
        );
        Ok(moto)
    }

    /// Replaces every field of a moto.
    pub async fn update(&self, id: i64, data: MotoData) -> AppResult<Moto> {
        self.find(id).await?;
        self.validator.check_moto(&data, Some(id)).await?;
        let moto = self
            .repos
            .motos
            .update(id, &data)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(moto_id = id, placa = %moto.placa, "Moto updated");
        Ok(moto)
    }

    /// Removes a moto.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;
        self.repos.motos.delete(id).await?;
        info!(moto_id = id, "Moto deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<Moto> {
        self.repos
            .motos
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn join(&self, motos: Vec<Moto>) -> AppResult<Vec<MotoDetails>> {
        let mut zones = HashMap::new();
        let mut yards = HashMap::new();
        let mut statuses = HashMap::new();

        let mut joined = Vec::with_capacity(motos.len());
        for moto in motos {
            let zona = lookup(self.repos.zones.as_ref(), &mut zones, moto.zona_id).await?;
            let patio = lookup(self.repos.yards.as_ref(), &mut yards, moto.patio_id).await?;
            let status =
                lookup(self.repos.statuses.as_ref(), &mut statuses, moto.status_id).await?;
            joined.push(MotoDetails {
                moto,
                zona,
                patio,
                status,
            });
        }
        Ok(joined)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Moto {id} não encontrada"))
}
