//! Error types raised by catalog implementations.

use meal_core::{DomainError, ErrorSeverity, MealError, MealId, StatsError};
use thiserror::Error;

/// Errors surfaced by catalog implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    InvalidMeal(#[from] MealError),

    #[error("Meal with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Meal with ID {0} not found")]
    NotFound(MealId),

    #[error("Meal with name '{0}' not found")]
    NameNotFound(String),

    #[error("Meal with ID {0} has been deleted")]
    Deleted(MealId),

    #[error("Invalid sort_by parameter: {0}. Expected 'wins' or 'win_pct'.")]
    InvalidSort(String),

    #[error("catalog lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl From<RepositoryError> for StatsError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => StatsError::NotFound(id),
            RepositoryError::Deleted(id) => StatsError::Deleted(id),
            other => StatsError::Storage(other.to_string()),
        }
    }
}

impl DomainError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidMeal(err) => err.severity(),
            Self::DuplicateName(_)
            | Self::NotFound(_)
            | Self::NameNotFound(_)
            | Self::Deleted(_)
            | Self::InvalidSort(_) => ErrorSeverity::Validation,
            Self::LockPoisoned | Self::Io(_) | Self::Json(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMeal(err) => err.error_code(),
            Self::DuplicateName(_) => "CATALOG_DUPLICATE_NAME",
            Self::NotFound(_) | Self::NameNotFound(_) => "CATALOG_MEAL_NOT_FOUND",
            Self::Deleted(_) => "CATALOG_MEAL_DELETED",
            Self::InvalidSort(_) => "CATALOG_INVALID_SORT",
            Self::LockPoisoned => "CATALOG_LOCK_POISONED",
            Self::Io(_) => "CATALOG_IO",
            Self::Json(_) => "CATALOG_JSON",
        }
    }
}
