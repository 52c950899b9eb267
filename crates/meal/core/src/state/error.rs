//! Validation errors for meal attributes.

use crate::error::{DomainError, ErrorSeverity};

/// Errors raised while building a [`Meal`](super::Meal) or parsing its fields.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MealError {
    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    InvalidOutcome(String),
}

impl DomainError for MealError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPrice(_) => "MEAL_INVALID_PRICE",
            Self::InvalidDifficulty(_) => "MEAL_INVALID_DIFFICULTY",
            Self::InvalidOutcome(_) => "MEAL_INVALID_OUTCOME",
        }
    }
}
