//! In-memory repository.
//!
//! Backs the `memory` database provider and the test suites. Rows live in
//! an id-ordered map behind an async `RwLock`; id allocation and insert
//! happen under one write guard, so concurrent creates get distinct,
//! gap-free ids.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use mottu_core::result::AppResult;
use mottu_core::traits::{Record, Repository};
use mottu_core::types::{FilterField, PageRequest, PageSlice};

use crate::id_allocator::next_id_after;

/// A table held in process memory.
pub struct MemoryRepository<E> {
    rows: Arc<RwLock<BTreeMap<i64, E>>>,
}

impl<E> Clone for MemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<E: Record> MemoryRepository<E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_all<E: Record>(row: &E, filters: &[FilterField]) -> bool {
    filters
        .iter()
        .all(|f| f.matches(row.field(&f.field).as_ref()))
}

#[async_trait]
impl<E: Record> Repository<E> for MemoryRepository<E> {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_page(
        &self,
        filters: &[FilterField],
        page: &PageRequest,
    ) -> AppResult<PageSlice<E>> {
        let rows = self.rows.read().await;
        let matching: Vec<&E> = rows.values().filter(|r| matches_all(*r, filters)).collect();
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(PageSlice::new(items, total))
    }

    async fn count(&self, filters: &[FilterField]) -> AppResult<u64> {
        let rows = self.rows.read().await;
        Ok(rows.values().filter(|r| matches_all(*r, filters)).count() as u64)
    }

    async fn create(&self, data: &E::Data) -> AppResult<E> {
        let mut rows = self.rows.write().await;
        let id = next_id_after(rows.keys());
        let row = E::from_data(id, data);
        rows.insert(row.id(), row.clone());
        debug!(table = %E::TABLE, id, "Inserted row");
        Ok(row)
    }

    async fn update(&self, id: i64, data: &E::Data) -> AppResult<Option<E>> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) => {
                *row = E::from_data(id, data);
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn truncate(&self) -> AppResult<()> {
        self.rows.write().await.clear();
        Ok(())
    }
}
