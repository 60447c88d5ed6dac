//! Command entry points run against a file-backed SQLite database.

use tempfile::TempDir;

use common::DatabaseConfig;
use domain::DEFAULT_ROLES;
use quiz_store_lib::config::QuizStoreConfig;
use quiz_store_lib::repository::UserRepository;
use quiz_store_lib::MigrateAction;

fn config_in(dir: &TempDir) -> QuizStoreConfig {
    let path = dir.path().join("cli.sqlite");
    QuizStoreConfig {
        database: DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: 1,
            min_connections: 1,
        },
    }
}

#[tokio::test]
async fn every_migrate_action_succeeds() {
    let dir = TempDir::with_prefix("quiz-store-cli").unwrap();
    let config = config_in(&dir);

    for action in [
        MigrateAction::Up,
        MigrateAction::Status,
        MigrateAction::Down,
        MigrateAction::Up,
        MigrateAction::Fresh,
        MigrateAction::Status,
    ] {
        quiz_store_lib::run_migrations(&config, action)
            .await
            .unwrap_or_else(|e| panic!("{action:?} failed: {e}"));
    }
}

#[tokio::test]
async fn seed_is_repeatable_and_visible_after_connect() {
    let dir = TempDir::with_prefix("quiz-store-cli").unwrap();
    let config = config_in(&dir);

    quiz_store_lib::run_seed(&config).await.unwrap();
    quiz_store_lib::run_seed(&config).await.unwrap();

    let persistence = quiz_store_lib::connect(&config).await.unwrap();
    let names: Vec<String> = persistence
        .users()
        .list_roles()
        .await
        .unwrap()
        .into_iter()
        .map(|role| role.name)
        .collect();
    assert_eq!(names, DEFAULT_ROLES);
}

#[tokio::test]
async fn check_reaches_the_database() {
    let dir = TempDir::with_prefix("quiz-store-cli").unwrap();

    quiz_store_lib::run_check(&config_in(&dir)).await.unwrap();
}
