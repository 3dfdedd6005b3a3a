//! Provider selection: one repository per table behind a trait object.

use std::sync::Arc;

use tracing::info;

use mottu_core::config::{DatabaseConfig, DatabaseProvider};
use mottu_core::result::AppResult;
use mottu_core::traits::Repository;
use mottu_entity::{Moto, Status, StatusGroup, User, Yard, Zone};

use crate::connection::DatabasePool;
use crate::memory::MemoryRepository;
use crate::migration;
use crate::repositories::PgRepository;

/// The six repositories of the application.
#[derive(Clone)]
pub struct Repositories {
    /// `usuario`
    pub users: Arc<dyn Repository<User>>,
    /// `zona`
    pub zones: Arc<dyn Repository<Zone>>,
    /// `patio`
    pub yards: Arc<dyn Repository<Yard>>,
    /// `status_grupo`
    pub status_groups: Arc<dyn Repository<StatusGroup>>,
    /// `status`
    pub statuses: Arc<dyn Repository<Status>>,
    /// `moto`
    pub motos: Arc<dyn Repository<Moto>>,
}

impl Repositories {
    /// SQL repositories over a shared pool.
    pub fn postgres(pool: &DatabasePool) -> Self {
        let pool = pool.pool();
        Self {
            users: Arc::new(PgRepository::<User>::new(pool.clone())),
            zones: Arc::new(PgRepository::<Zone>::new(pool.clone())),
            yards: Arc::new(PgRepository::<Yard>::new(pool.clone())),
            status_groups: Arc::new(PgRepository::<StatusGroup>::new(pool.clone())),
            statuses: Arc::new(PgRepository::<Status>::new(pool.clone())),
            motos: Arc::new(PgRepository::<Moto>::new(pool.clone())),
        }
    }

    /// Empty in-memory tables.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryRepository::<User>::new()),
            zones: Arc::new(MemoryRepository::<Zone>::new()),
            yards: Arc::new(MemoryRepository::<Yard>::new()),
            status_groups: Arc::new(MemoryRepository::<StatusGroup>::new()),
            statuses: Arc::new(MemoryRepository::<Status>::new()),
            motos: Arc::new(MemoryRepository::<Moto>::new()),
        }
    }

    /// Remove every row of every table, referencing tables first.
    pub async fn truncate_all(&self) -> AppResult<()> {
        self.motos.truncate().await?;
        self.statuses.truncate().await?;
        self.status_groups.truncate().await?;
        self.yards.truncate().await?;
        self.zones.truncate().await?;
        self.users.truncate().await?;
        info!("All tables emptied");
        Ok(())
    }
}

/// The configured data store.
#[derive(Clone)]
pub struct DataStore {
    repositories: Repositories,
    pool: Option<DatabasePool>,
}

impl DataStore {
    /// Open the store selected by `database.provider`.
    ///
    /// For PostgreSQL, pending migrations are applied only when
    /// `database.auto_migrate` is set.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    migration::run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    repositories: Repositories::postgres(&pool),
                    pool: Some(pool),
                })
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory data store; data is lost on exit");
                Ok(Self::memory())
            }
        }
    }

    /// A fresh in-memory store.
    pub fn memory() -> Self {
        Self {
            repositories: Repositories::memory(),
            pool: None,
        }
    }

    /// Repositories of this store.
    pub fn repositories(&self) -> &Repositories {
        &self.repositories
    }

    /// The SQL pool, if the store is PostgreSQL-backed.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Whether the store is reachable. The in-memory store always is.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release pooled connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
