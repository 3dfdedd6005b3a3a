//! Fixed demonstration dataset.
//!
//! Two users, two zones, two yards, two status groups, three statuses and
//! two motos. Rows are created through the repositories, so ids come from
//! the normal allocator and foreign keys are wired from the returned rows.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use mottu_auth::PasswordHasher;
use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::types::Table;
use mottu_database::Repositories;
use mottu_entity::{
    MotoData, StatusData, StatusGroupData, UserData, YardData, ZoneData,
};

/// Row counts inserted by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Users inserted.
    pub users: usize,
    /// Zones inserted.
    pub zones: usize,
    /// Yards inserted.
    pub yards: usize,
    /// Status groups inserted.
    pub status_groups: usize,
    /// Statuses inserted.
    pub statuses: usize,
    /// Motos inserted.
    pub motos: usize,
}

/// Loads the demonstration dataset.
pub struct Seeder {
    repos: Repositories,
    hasher: Arc<PasswordHasher>,
}

impl Seeder {
    /// Creates a seeder over the given repositories.
    pub fn new(repos: Repositories, hasher: Arc<PasswordHasher>) -> Self {
        Self { repos, hasher }
    }

    /// Insert the dataset. With `reset`, every table is emptied first;
    /// without it, seeding refuses to touch a non-empty table.
    pub async fn run(&self, reset: bool) -> AppResult<SeedReport> {
        if reset {
            self.repos.truncate_all().await?;
        } else if let Some(table) = self.first_non_empty().await? {
            return Err(AppError::validation(format!(
                "Table {table} already has rows; re-run with --reset to replace them"
            )));
        }

        let mut report = SeedReport::default();

        for (usuario, senha) in [("admin", "admin@123"), ("operador", "123456")] {
            self.repos
                .users
                .create(&UserData {
                    usuario: usuario.to_string(),
                    senha_hash: self.hasher.hash(senha)?,
                })
                .await?;
            report.users += 1;
        }

        let mut zones = Vec::new();
        for (nome, letra) in [("Norte", "N"), ("Sul", "S")] {
            let zone = self
                .repos
                .zones
                .create(&ZoneData {
                    nome: nome.to_string(),
                    letra: letra.to_string(),
                })
                .await?;
            zones.push(zone.id);
            report.zones += 1;
        }

        let mut yards = Vec::new();
        for nome in ["Pátio A", "Pátio B"] {
            let yard = self
                .repos
                .yards
                .create(&YardData {
                    nome: nome.to_string(),
                })
                .await?;
            yards.push(yard.id);
            report.yards += 1;
        }

        let mut groups = Vec::new();
        for nome in ["Operacional", "Exceção"] {
            let group = self
                .repos
                .status_groups
                .create(&StatusGroupData {
                    nome: nome.to_string(),
                })
                .await?;
            groups.push(group.id);
            report.status_groups += 1;
        }

        let mut statuses = Vec::new();
        for (nome, group) in [("OK", 0), ("Manutenção", 0), ("Sinistro", 1)] {
            let status = self
                .repos
                .statuses
                .create(&StatusData {
                    nome: nome.to_string(),
                    status_grupo_id: groups[group],
                })
                .await?;
            statuses.push(status.id);
            report.statuses += 1;
        }

        let now = Utc::now();
        let motos = [
            MotoData {
                placa: "ABC1D23".into(),
                chassi: "9BWZZZ377VT004251".into(),
                qr_code: Some("QR001".into()),
                data_entrada: now,
                previsao_entrega: Some(now + Duration::days(1)),
                fotos: None,
                zona_id: zones[0],
                patio_id: yards[0],
                status_id: statuses[0],
                observacoes: Some("Moto em perfeito estado".into()),
            },
            MotoData {
                placa: "EFG4H56".into(),
                chassi: "9BWZZZ377VT004252".into(),
                qr_code: Some("QR002".into()),
                data_entrada: now,
                previsao_entrega: None,
                fotos: None,
                zona_id: zones[1],
                patio_id: yards[1],
                status_id: statuses[1],
                observacoes: Some("Em manutenção preventiva".into()),
            },
        ];
        for moto in &motos {
            self.repos.motos.create(moto).await?;
            report.motos += 1;
        }

        info!(?report, reset, "Seed data loaded");
        Ok(report)
    }

    async fn first_non_empty(&self) -> AppResult<Option<Table>> {
        let counts = [
            (Table::Usuario, self.repos.users.count(&[]).await?),
            (Table::Zona, self.repos.zones.count(&[]).await?),
            (Table::Patio, self.repos.yards.count(&[]).await?),
            (Table::StatusGrupo, self.repos.status_groups.count(&[]).await?),
            (Table::Status, self.repos.statuses.count(&[]).await?),
            (Table::Moto, self.repos.motos.count(&[]).await?),
        ];
        Ok(counts
            .into_iter()
            .find(|(_, count)| *count > 0)
            .map(|(table, _)| table))
    }
}
