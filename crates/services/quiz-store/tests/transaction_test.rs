//! Multi-step writes through the storage context.

mod support;

use common::{AppError, AppResult, ConstraintKind};
use domain::{NewEnrollment, NewRole, NewSubject, NewUser, User};
use quiz_store_lib::repository::{SubjectRepository, UserRepository};
use quiz_store_lib::{seed, with_transaction, UnitOfWork};

use support::TestDb;

#[tokio::test]
async fn committed_transaction_is_visible() {
    let test = TestDb::new().await;

    let user: User = test
        .persistence
        .transaction(|tx| {
            Box::pin(async move {
                let user = tx
                    .users()
                    .create_user(NewUser::new("ada", "ada@example.com", "hash"))
                    .await?;
                let role = tx.users().create_role(NewRole::new("instructor")).await?;
                tx.users().assign_role(user.id, role.id).await?;
                Ok::<_, AppError>(user)
            })
        })
        .await
        .unwrap();

    let users = test.persistence.users();
    assert_eq!(users.find_by_username("ada").await.unwrap(), Some(user.clone()));
    assert_eq!(users.roles_for_user(user.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_transaction_rolls_back_earlier_writes() {
    let test = TestDb::new().await;

    let result: AppResult<()> = test
        .persistence
        .transaction(|tx| {
            Box::pin(async move {
                tx.users()
                    .create_user(NewUser::new("ada", "ada@example.com", "hash"))
                    .await?;
                tx.users()
                    .create_user(NewUser::new("ada", "again@example.com", "hash"))
                    .await?;
                Ok::<_, AppError>(())
            })
        })
        .await;

    let err = result.unwrap_err();
    assert!(err.is_constraint(ConstraintKind::Unique), "got {err:?}");
    assert_eq!(test.persistence.users().find_by_username("ada").await.unwrap(), None);
}

#[tokio::test]
async fn closure_error_rolls_back() {
    let test = TestDb::new().await;

    let result: AppResult<()> = test
        .persistence
        .transaction_serializable(|tx| {
            Box::pin(async move {
                tx.subjects().create_subject(NewSubject::new("Art")).await?;
                Err::<(), _>(AppError::validation("changed my mind"))
            })
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(test.persistence.subjects().list_subjects().await.unwrap().is_empty());
}

#[tokio::test]
async fn with_transaction_macro_commits() {
    let test = TestDb::new().await;
    let persistence = test.persistence.clone();

    let enrollment = with_transaction!(persistence, |tx| {
        let user = tx
            .users()
            .create_user(NewUser::new("sam", "sam@example.com", "hash"))
            .await?;
        let subject = tx.subjects().create_subject(NewSubject::new("Music")).await?;
        tx.subjects()
            .enroll(NewEnrollment::new(user.id, subject.id))
            .await
    })
    .unwrap();

    let stored = test
        .persistence
        .subjects()
        .enrollments_for_subject(enrollment.subject_id)
        .await
        .unwrap();
    assert_eq!(stored, vec![enrollment]);
}

#[tokio::test]
async fn seeding_twice_creates_roles_once() {
    let test = TestDb::new().await;
    let users = test.persistence.users();

    let first = seed::seed_default_roles(&users).await.unwrap();
    let second = seed::seed_default_roles(&users).await.unwrap();

    assert_eq!(first.len(), domain::DEFAULT_ROLES.len());
    assert!(second.is_empty());
    assert_eq!(users.list_roles().await.unwrap(), first);
}
