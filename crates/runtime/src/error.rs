//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from the catalog, the oracle and the battle rules so clients
//! can bubble them up with consistent context.
use meal_core::{BattleError, DomainError, ErrorSeverity, MealId, RandomError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("failed to initialize random oracle")]
    Oracle(#[source] RandomError),

    #[error("meal {0} cannot battle itself")]
    SelfBattle(MealId),

    #[error("a gauntlet needs at least two meals, got {0}")]
    NotEnoughEntrants(usize),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DomainError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(err) => err.severity(),
            Self::Battle(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
            Self::SelfBattle(_) | Self::NotEnoughEntrants(_) | Self::Config(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(err) => err.error_code(),
            Self::Battle(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
            Self::SelfBattle(_) => "ARENA_SELF_BATTLE",
            Self::NotEnoughEntrants(_) => "ARENA_NOT_ENOUGH_ENTRANTS",
            Self::Config(_) => "CONFIG_INVALID",
        }
    }
}
