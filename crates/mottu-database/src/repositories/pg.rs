//! Generic PostgreSQL repository.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use mottu_core::error::{AppError, ErrorKind};
use mottu_core::result::AppResult;
use mottu_core::traits::{Record, Repository};
use mottu_core::types::{FilterField, FilterValue, PageRequest, PageSlice};

use crate::id_allocator;

/// A bound column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// `VARCHAR NOT NULL`
    Text(String),
    /// Nullable `VARCHAR` / `TEXT`
    OptText(Option<String>),
    /// `BIGINT`
    BigInt(i64),
    /// `TIMESTAMPTZ NOT NULL`
    Timestamp(DateTime<Utc>),
    /// Nullable `TIMESTAMPTZ`
    OptTimestamp(Option<DateTime<Utc>>),
}

/// A row type stored in its own PostgreSQL table.
pub trait PgRecord: Record + for<'r> FromRow<'r, PgRow> + Unpin {
    /// Columns accepted in filters. Filter field names are checked
    /// against this list before being written into SQL.
    const FILTER_COLUMNS: &'static [&'static str];

    /// Writable columns with their values, in table order.
    fn columns(data: &Self::Data) -> Vec<(&'static str, SqlValue)>;
}

/// CRUD over one table.
pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: PgRecord> PgRepository<E> {
    /// Create a repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn table() -> &'static str {
        E::TABLE.as_str()
    }
}

fn db_error(action: &str, table: &str, e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("Failed to {action} {table}"), e)
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: SqlValue) {
    match value {
        SqlValue::Text(v) => qb.push_bind(v),
        SqlValue::OptText(v) => qb.push_bind(v),
        SqlValue::BigInt(v) => qb.push_bind(v),
        SqlValue::Timestamp(v) => qb.push_bind(v),
        SqlValue::OptTimestamp(v) => qb.push_bind(v),
    };
}

/// `LIMIT` and `OFFSET` as `BIGINT` binds. Offsets past `i64::MAX` are
/// clamped so a huge page number yields an empty page.
pub(crate) fn sql_window(page: &PageRequest) -> (i64, i64) {
    (
        i64::try_from(page.limit()).unwrap_or(i64::MAX),
        i64::try_from(page.offset()).unwrap_or(i64::MAX),
    )
}

/// Append ` WHERE a = $1 AND b ILIKE $2 ...` for the given filters.
pub(crate) fn push_filters(
    qb: &mut QueryBuilder<'_, Postgres>,
    filters: &[FilterField],
    allowed: &[&str],
) -> AppResult<()> {
    for (i, filter) in filters.iter().enumerate() {
        if !allowed.contains(&filter.field.as_str()) {
            return Err(AppError::internal(format!(
                "Column '{}' is not filterable",
                filter.field
            )));
        }
        qb.push(if i == 0 { " WHERE " } else { " AND " })
            .push(&filter.field)
            .push(' ')
            .push(filter.op.as_sql())
            .push(' ');
        match &filter.value {
            FilterValue::String(s) => qb.push_bind(s.clone()),
            FilterValue::Integer(n) => qb.push_bind(*n),
        };
    }
    Ok(())
}

#[async_trait]
impl<E: PgRecord> Repository<E> for PgRepository<E> {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        sqlx::query_as::<_, E>(&format!("SELECT * FROM {} WHERE id = $1", Self::table()))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find", Self::table(), e))
    }

    async fn find_page(
        &self,
        filters: &[FilterField],
        page: &PageRequest,
    ) -> AppResult<PageSlice<E>> {
        let total = self.count(filters).await?;

        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT * FROM {}", Self::table()));
        push_filters(&mut qb, filters, E::FILTER_COLUMNS)?;
        let (limit, offset) = sql_window(page);
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let items = qb
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list", Self::table(), e))?;

        Ok(PageSlice::new(items, total))
    }

    async fn count(&self, filters: &[FilterField]) -> AppResult<u64> {
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {}", Self::table()));
        push_filters(&mut qb, filters, E::FILTER_COLUMNS)?;

        let total: i64 = qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count", Self::table(), e))?;
        Ok(total as u64)
    }

    async fn create(&self, data: &E::Data) -> AppResult<E> {
        let table = Self::table();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin insert into", table, e))?;

        id_allocator::lock_table(&mut tx, E::TABLE).await?;
        let id = id_allocator::next_id(&mut tx, E::TABLE).await?;

        let columns = E::columns(data);
        let mut qb = QueryBuilder::<Postgres>::new(format!("INSERT INTO {table} (id"));
        for (name, _) in &columns {
            qb.push(", ").push(*name);
        }
        qb.push(") VALUES (").push_bind(id);
        for (_, value) in columns {
            qb.push(", ");
            push_value(&mut qb, value);
        }
        qb.push(") RETURNING *");

        let row = qb
            .build_query_as::<E>()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| db_error("insert into", table, e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("commit insert into", table, e))?;

        debug!(table, id, "Inserted row");
        Ok(row)
    }

    async fn update(&self, id: i64, data: &E::Data) -> AppResult<Option<E>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", Self::table()));
        for (i, (name, value)) in E::columns(data).into_iter().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            qb.push(name).push(" = ");
            push_value(&mut qb, value);
        }
        qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        qb.build_query_as::<E>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("update", Self::table(), e))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", Self::table()))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete from", Self::table(), e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn truncate(&self) -> AppResult<()> {
        sqlx::query(&format!("DELETE FROM {}", Self::table()))
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("empty", Self::table(), e))?;
        Ok(())
    }
}
