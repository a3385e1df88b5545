//! Unified error type for the ledger.
//!
//! Variants fall in two groups: user-facing ones (not found, validation, bad
//! amounts) that callers show verbatim, and internal ones that callers report
//! as a generic failure.

use sea_orm::DbErr;
use thiserror::Error;

/// Every failure the ledger can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// The id as the caller supplied it
        id: String,
    },

    #[error("Transaction not found: {id}")]
    TransactionNotFound {
        /// The id as the caller supplied it
        id: String,
    },

    #[error("Validation error: {message}")]
    Validation {
        /// Why the input was rejected
        message: String,
    },

    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// The atomic unit could not be written or committed and was rolled back.
    #[error("Transaction aborted: {source}")]
    TransactionAborted {
        /// Store error that caused the rollback
        #[source]
        source: DbErr,
    },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wraps a store error raised inside an atomic unit.
    #[must_use]
    pub const fn aborted(source: DbErr) -> Self {
        Self::TransactionAborted { source }
    }

    /// Reclassifies a plain store error as an aborted atomic unit.
    #[must_use]
    pub fn into_aborted(self) -> Self {
        match self {
            Self::Database(source) => Self::TransactionAborted { source },
            other => other,
        }
    }

    /// Whether the message is meant for the end user as-is.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound { .. }
                | Self::TransactionNotFound { .. }
                | Self::Validation { .. }
                | Self::InvalidAmount { .. }
        )
    }

    /// The message a caller should display: the error itself for user-facing
    /// variants, a generic failure otherwise.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            "Something went wrong, please try again".to_string()
        }
    }

    pub(crate) fn category_not_found(id: impl ToString) -> Self {
        Self::CategoryNotFound { id: id.to_string() }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
