//! Quiz Store Library
//!
//! Relational schema for quizzes and assessments: migrations, sea-orm
//! entities, insert/read repositories and the [`Persistence`] storage
//! context that hands them out.

pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;

use tracing::info;

use crate::config::QuizStoreConfig;
use crate::infra::Database;

pub use crate::repository::{Persistence, TransactionContext, UnitOfWork};

/// Connect, apply pending migrations and build the storage context.
pub async fn connect(config: &QuizStoreConfig) -> Result<Persistence, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    Ok(Persistence::new(db.get_connection()))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &QuizStoreConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Insert the default roles (for CLI commands).
pub async fn run_seed(config: &QuizStoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let persistence = connect(config).await?;
    let created = seed::seed_default_roles(&persistence.users()).await?;
    info!(created = created.len(), "Default roles seeded");
    Ok(())
}

/// Connect and ping the database (for CLI commands).
pub async fn run_check(config: &QuizStoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database reachable");
    Ok(())
}
