//! Sequential identifier allocation.
//!
//! Ids are `max(id) + 1` per table, 1 for an empty table. The caller runs
//! [`lock_table`] and [`next_id`] inside the same transaction as the
//! insert, so two concurrent creates on one table cannot read the same
//! maximum. The lock mode conflicts with itself and with row writes but
//! not with plain reads.

use sqlx::PgConnection;
use tracing::debug;

use mottu_core::error::{AppError, ErrorKind};
use mottu_core::result::AppResult;
use mottu_core::types::Table;

/// SQL that computes the next id of `table`.
pub fn next_id_sql(table: Table) -> String {
    format!("SELECT COALESCE(MAX(id), 0) + 1 FROM {}", table.as_str())
}

/// SQL that serialises writers of `table` until the transaction ends.
pub fn lock_table_sql(table: Table) -> String {
    format!("LOCK TABLE {} IN SHARE ROW EXCLUSIVE MODE", table.as_str())
}

/// Take the allocation lock on `table`. Must run inside a transaction.
pub async fn lock_table(conn: &mut PgConnection, table: Table) -> AppResult<()> {
    sqlx::query(&lock_table_sql(table))
        .execute(conn)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to lock table {table}"),
                e,
            )
        })?;
    Ok(())
}

/// Compute the next id of `table`.
pub async fn next_id(conn: &mut PgConnection, table: Table) -> AppResult<i64> {
    let id: i64 = sqlx::query_scalar(&next_id_sql(table))
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to allocate id for {table}"),
                e,
            )
        })?;
    debug!(%table, id, "Allocated id");
    Ok(id)
}

/// In-memory counterpart of [`next_id`]: one past the largest key.
pub fn next_id_after<'a>(ids: impl IntoIterator<Item = &'a i64>) -> i64 {
    ids.into_iter().copied().max().unwrap_or(0) + 1
}
