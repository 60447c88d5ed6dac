//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and runs multi-step writes atomically:
//! every store handed out by a [`TransactionContext`] writes through the
//! same database transaction, which commits only if the closure succeeds.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};

use super::{AttemptStore, QuizStore, SubjectStore, UserStore};
use common::{AppError, AppResult};

/// Boxed future returned by transactional closures.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure within a transaction.
    ///
    /// Committed on success, rolled back on error. Uses ReadCommitted
    /// isolation where the backend supports choosing one.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;

    /// Execute a closure within a transaction with serializable isolation.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// The context borrows the transaction, so nothing obtained from it can
/// outlive the commit or rollback.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> UserStore<'a, DatabaseTransaction> {
        UserStore::new(self.txn)
    }

    pub fn subjects(&self) -> SubjectStore<'a, DatabaseTransaction> {
        SubjectStore::new(self.txn)
    }

    pub fn quizzes(&self) -> QuizStore<'a, DatabaseTransaction> {
        QuizStore::new(self.txn)
    }

    pub fn attempts(&self) -> AttemptStore<'a, DatabaseTransaction> {
        AttemptStore::new(self.txn)
    }

    /// Raw transaction handle for queries the stores do not cover
    pub fn connection(&self) -> &'a DatabaseTransaction {
        self.txn
    }
}

/// Concrete implementation of UnitOfWork
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Underlying connection pool
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn users(&self) -> UserStore<'_, DatabaseConnection> {
        UserStore::new(&self.db)
    }

    pub fn subjects(&self) -> SubjectStore<'_, DatabaseConnection> {
        SubjectStore::new(&self.db)
    }

    pub fn quizzes(&self) -> QuizStore<'_, DatabaseConnection> {
        QuizStore::new(&self.db)
    }

    pub fn attempts(&self) -> AttemptStore<'_, DatabaseConnection> {
        AttemptStore::new(&self.db)
    }

    /// Internal transaction execution with configurable isolation level
    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::Serializable, f).await
    }
}

/// Run a block inside a transaction of the given unit of work.
///
/// `with_transaction!(persistence, |tx| { ... })` expands to
/// `persistence.transaction(|tx| Box::pin(async move { ... })).await`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {{
        use $crate::repository::UnitOfWork as _;
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    }};
}
