//! Generic repository trait for data access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::filter::{FilterField, FilterValue};
use crate::types::pagination::{PageRequest, PageSlice};
use crate::types::table::Table;

/// A persisted row with a store-assigned integer id.
///
/// `Data` is the writable part of the row: everything except the id.
/// Creating and fully replacing a row both take a `Data` value.
pub trait Record: Clone + Send + Sync + 'static {
    /// Writable columns of the row.
    type Data: Clone + Send + Sync + 'static;

    /// The table the row lives in.
    const TABLE: Table;

    /// Primary key.
    fn id(&self) -> i64;

    /// Build a row from its id and data.
    fn from_data(id: i64, data: &Self::Data) -> Self;

    /// Value of a filterable column, by column name. `None` for unknown
    /// columns and for SQL `NULL`.
    fn field(&self, column: &str) -> Option<FilterValue>;
}

/// Generic CRUD repository.
///
/// Each entity gets a strongly typed repository; backends implement it
/// once per table (SQL) or once generically (in-memory). All listings are
/// ordered by ascending id.
#[async_trait]
pub trait Repository<E: Record>: Send + Sync + 'static {
    /// Find a row by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>>;

    /// One page of rows matching every filter, with the total match count.
    async fn find_page(&self, filters: &[FilterField], page: &PageRequest)
    -> AppResult<PageSlice<E>>;

    /// Count rows matching every filter.
    async fn count(&self, filters: &[FilterField]) -> AppResult<u64>;

    /// Whether any row matches every filter.
    async fn exists(&self, filters: &[FilterField]) -> AppResult<bool> {
        Ok(self.count(filters).await? > 0)
    }

    /// Insert a row under the next sequential id (`max(id) + 1`, or 1 on
    /// an empty table) and return it.
    async fn create(&self, data: &E::Data) -> AppResult<E>;

    /// Replace every writable column of a row. Returns `None` if the id
    /// does not exist.
    async fn update(&self, id: i64, data: &E::Data) -> AppResult<Option<E>>;

    /// Delete a row by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Remove every row. Used by the seeder's reset.
    async fn truncate(&self) -> AppResult<()>;
}
