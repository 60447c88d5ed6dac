//! Migration bookkeeping on a real database.

mod support;

use quiz_store_lib::repository::UserRepository;

use support::{create_user, TestDb};

#[tokio::test]
async fn all_migrations_are_applied_on_connect() {
    let test = TestDb::new().await;

    let status = test.db.migration_status().await.unwrap();
    let names: Vec<&str> = status.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "m20240101_000001_create_identity_tables",
            "m20240101_000002_create_subject_tables",
            "m20240101_000003_create_quiz_tables",
            "m20240101_000004_create_attempt_tables",
        ]
    );
    assert!(status.iter().all(|(_, applied)| *applied));
    test.db.ping().await.unwrap();
}

#[tokio::test]
async fn rollback_reverts_only_the_last_migration() {
    let test = TestDb::new().await;

    test.db.rollback_migration().await.unwrap();
    let status = test.db.migration_status().await.unwrap();
    let applied: Vec<bool> = status.iter().map(|(_, applied)| *applied).collect();
    assert_eq!(applied, vec![true, true, true, false]);

    test.db.run_migrations().await.unwrap();
    let status = test.db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn fresh_migrations_start_from_empty_tables() {
    let test = TestDb::new().await;
    create_user(&test.persistence, "ada").await;

    test.db.fresh_migrations().await.unwrap();

    assert!(test.persistence.users().list_users().await.unwrap().is_empty());
}
