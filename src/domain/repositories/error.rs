//! Error type returned by every repository operation.

use std::time::Duration;
use thiserror::Error;

/// Closed set of data access outcomes callers switch on.
///
/// Zero matching rows is reported as [`RepositoryError::NotFound`], never as a
/// storage failure.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no link with short code `{code}`")]
    NotFound { code: String },

    #[error("constraint `{constraint}` violated")]
    ConstraintViolation { constraint: String },

    #[error("{operation} failed for `{key}`: {source}")]
    Persistence {
        operation: &'static str,
        key: String,
        #[source]
        source: PersistenceCause,
    },
}

/// Underlying reason for a [`RepositoryError::Persistence`].
#[derive(Debug, Error)]
pub enum PersistenceCause {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("statement exceeded its {0:?} deadline")]
    Timeout(Duration),
}

impl RepositoryError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Classifies a driver error raised by `operation` on `key`.
    ///
    /// Unique and check violations become [`RepositoryError::ConstraintViolation`],
    /// `RowNotFound` becomes [`RepositoryError::NotFound`], everything else is a
    /// [`RepositoryError::Persistence`].
    pub fn from_sqlx(operation: &'static str, key: &str, err: sqlx::Error) -> Self {
        if let Some(db) = err.as_database_error()
            && (db.is_unique_violation() || db.is_check_violation())
        {
            return Self::ConstraintViolation {
                constraint: db.constraint().unwrap_or("unknown").to_string(),
            };
        }

        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::not_found(key);
        }

        Self::Persistence {
            operation,
            key: key.to_string(),
            source: PersistenceCause::Database(err),
        }
    }

    pub fn timeout(operation: &'static str, key: &str, after: Duration) -> Self {
        Self::Persistence {
            operation,
            key: key.to_string(),
            source: PersistenceCause::Timeout(after),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
