//! Seed data configuration.

use serde::{Deserialize, Serialize};

/// Gate for the `db seed` command.
///
/// Seeding is never performed by the server itself; the CLI refuses to
/// run it unless this section enables it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Allow the seed command to write the fixed sample dataset.
    #[serde(default)]
    pub enabled: bool,
}
