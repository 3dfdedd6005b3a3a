//! # mottu-service
//!
//! Business logic service layer for Mottu Vision. Each service validates
//! its input against the referenced tables, allocates ids through the
//! repository and logs every write.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod moto;
pub mod seed;
pub mod status;
pub mod user;
pub mod validation;
pub mod yard;
pub mod zone;

use std::sync::Arc;

use mottu_auth::PasswordHasher;
use mottu_database::Repositories;

pub use moto::MotoService;
pub use seed::{SeedReport, Seeder};
pub use status::{StatusGroupService, StatusService};
pub use user::{UserInput, UserService};
pub use validation::ReferentialValidator;
pub use yard::YardService;
pub use zone::ZoneService;

/// Every entity service, wired over one set of repositories.
#[derive(Clone)]
pub struct Services {
    /// Users.
    pub users: Arc<UserService>,
    /// Zones.
    pub zones: Arc<ZoneService>,
    /// Yards.
    pub yards: Arc<YardService>,
    /// Status groups.
    pub status_groups: Arc<StatusGroupService>,
    /// Statuses.
    pub statuses: Arc<StatusService>,
    /// Motos.
    pub motos: Arc<MotoService>,
}

impl Services {
    /// Build all services over `repos`.
    pub fn new(repos: &Repositories, hasher: Arc<PasswordHasher>) -> Self {
        let validator = Arc::new(ReferentialValidator::new(repos.clone()));
        Self {
            users: Arc::new(UserService::new(
                Arc::clone(&repos.users),
                Arc::clone(&validator),
                hasher,
            )),
            zones: Arc::new(ZoneService::new(
                Arc::clone(&repos.zones),
                Arc::clone(&validator),
            )),
            yards: Arc::new(YardService::new(
                Arc::clone(&repos.yards),
                Arc::clone(&validator),
            )),
            status_groups: Arc::new(StatusGroupService::new(
                Arc::clone(&repos.status_groups),
                Arc::clone(&validator),
            )),
            statuses: Arc::new(StatusService::new(
                Arc::clone(&repos.statuses),
                Arc::clone(&validator),
            )),
            motos: Arc::new(MotoService::new(repos.clone(), validator)),
        }
    }
}
