//! Shared setup for database-backed tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use common::DatabaseConfig;
use domain::{NewQuiz, NewUser, Quiz, User};
use quiz_store_lib::infra::Database;
use quiz_store_lib::repository::{QuizRepository, UserRepository};
use quiz_store_lib::Persistence;

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    // Kept so the directory outlives the connection
    _temp_dir: TempDir,
    pub db: Database,
    pub persistence: Persistence,
}

impl TestDb {
    pub async fn new() -> Self {
        let temp_dir = TempDir::with_prefix("quiz-store-test").expect("temp dir");
        let path = temp_dir.path().join("db.sqlite");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let config = DatabaseConfig {
            url,
            max_connections: 1,
            min_connections: 1,
        };
        let db = Database::connect(&config).await.expect("connect and migrate");
        let persistence = Persistence::new(db.get_connection());

        Self {
            _temp_dir: temp_dir,
            db,
            persistence,
        }
    }
}

pub fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().expect("valid timestamp")
}

pub async fn create_user(persistence: &Persistence, username: &str) -> User {
    persistence
        .users()
        .create_user(NewUser::new(
            username,
            format!("{username}@example.com"),
            "argon2-hash",
        ))
        .await
        .expect("create user")
}

pub async fn create_quiz(persistence: &Persistence, creator_user_id: i32, title: &str) -> Quiz {
    persistence
        .quizzes()
        .create_quiz(NewQuiz::new(creator_user_id, title))
        .await
        .expect("create quiz")
}
