use std::fmt;

use thiserror::Error;

/// Errors raised while loading connection settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("missing required setting: {field} (or set DATABASE_URL)")]
    MissingField { field: &'static str },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Constraint a failed statement ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    NotNull,
    ForeignKey,
    Unique,
    Check,
}

impl ConstraintViolation {
    /// Classifies a driver error. Returns `None` for anything that is not a
    /// constraint violation reported by the database.
    pub fn of(err: &sqlx::Error) -> Option<Self> {
        let sqlx::Error::Database(db_err) = err else {
            return None;
        };

        match db_err.kind() {
            sqlx::error::ErrorKind::NotNullViolation => Some(Self::NotNull),
            sqlx::error::ErrorKind::ForeignKeyViolation => Some(Self::ForeignKey),
            sqlx::error::ErrorKind::UniqueViolation => Some(Self::Unique),
            sqlx::error::ErrorKind::CheckViolation => Some(Self::Check),
            _ => None,
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotNull => "required field is missing",
            Self::ForeignKey => "referenced client does not exist",
            Self::Unique => "duplicate value",
            Self::Check => "check constraint failed",
        };
        f.write_str(name)
    }
}
