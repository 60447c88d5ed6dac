//! Unified error handling.
//!
//! Provides a single error type for the storage layer. Constraint failures
//! reported by the database engine are classified into
//! [`ConstraintViolation`] so callers can match on them without knowing
//! which backend is in use.

use std::fmt;

use domain::DomainError;
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

/// Kind of schema constraint a write violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::Unique => f.write_str("unique"),
            ConstraintKind::ForeignKey => f.write_str("foreign key"),
            ConstraintKind::NotNull => f.write_str("not null"),
        }
    }
}

/// Constraint violation reported by the storage engine.
///
/// `constraint` is the engine's own description, which names the
/// constraint or the column involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} constraint violated: {constraint}")]
pub struct ConstraintViolation {
    pub kind: ConstraintKind,
    pub constraint: String,
}

impl ConstraintViolation {
    pub fn new(kind: ConstraintKind, constraint: impl Into<String>) -> Self {
        Self {
            kind,
            constraint: constraint.into(),
        }
    }

    /// Classify a database error, if it is a constraint failure.
    ///
    /// `constraint` is the constraint name when the engine reports one
    /// (Postgres does), otherwise the engine's message.
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        if let DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) = err {
            if let Some(db_err) = e.as_database_error() {
                let code = db_err.code();
                if let Some(kind) = code.as_deref().and_then(Self::kind_for_code) {
                    let constraint = db_err
                        .constraint()
                        .map(str::to_owned)
                        .unwrap_or_else(|| db_err.message().to_owned());
                    return Some(Self::new(kind, constraint));
                }
            }
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                Some(Self::new(ConstraintKind::Unique, msg))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                Some(Self::new(ConstraintKind::ForeignKey, msg))
            }
            _ => None,
        }
    }

    // Postgres SQLSTATE, then SQLite extended result codes
    fn kind_for_code(code: &str) -> Option<ConstraintKind> {
        match code {
            "23505" | "2067" | "1555" => Some(ConstraintKind::Unique),
            "23503" | "787" => Some(ConstraintKind::ForeignKey),
            "23502" | "1299" => Some(ConstraintKind::NotNull),
            _ => None,
        }
    }
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Storage engine rejected a write
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error("Database error")]
    Database(DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Constraint(_) => "CONSTRAINT_VIOLATION",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::Constraint(violation) => violation.to_string(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// The classified constraint violation, if this is one
    pub fn constraint(&self) -> Option<&ConstraintViolation> {
        match self {
            AppError::Constraint(violation) => Some(violation),
            _ => None,
        }
    }

    /// Whether this is a violation of the given kind
    pub fn is_constraint(&self, kind: ConstraintKind) -> bool {
        self.constraint().is_some_and(|v| v.kind == kind)
    }
}

// =============================================================================
// Database Error Conversion
// =============================================================================

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match ConstraintViolation::from_db_err(&err) {
            Some(violation) => {
                tracing::debug!(kind = %violation.kind, constraint = %violation.constraint, "constraint violated");
                AppError::Constraint(violation)
            }
            None => AppError::Database(err),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::from(DomainError::from(errors))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
