//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mottu_auth::PasswordHasher;
use mottu_core::config::AppConfig;
use mottu_database::DataStore;
use mottu_service::{
    MotoService, Services, StatusGroupService, StatusService, UserService, YardService,
    ZoneService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Data store (PostgreSQL or in-memory).
    pub store: DataStore,

    /// User service.
    pub user_service: Arc<UserService>,
    /// Zone service.
    pub zone_service: Arc<ZoneService>,
    /// Yard service.
    pub yard_service: Arc<YardService>,
    /// Status group service.
    pub status_group_service: Arc<StatusGroupService>,
    /// Status service.
    pub status_service: Arc<StatusService>,
    /// Moto service.
    pub moto_service: Arc<MotoService>,
}

impl AppState {
    /// Wire every service over the store's repositories.
    pub fn new(config: AppConfig, store: DataStore) -> Self {
        let services = Services::new(store.repositories(), Arc::new(PasswordHasher::new()));
        Self {
            config: Arc::new(config),
            store,
            user_service: services.users,
            zone_service: services.zones,
            yard_service: services.yards,
            status_group_service: services.status_groups,
            status_service: services.statuses,
            moto_service: services.motos,
        }
    }
}
