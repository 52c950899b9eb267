//! Win/loss bookkeeping seam between the resolver and the catalog.

use crate::error::{DomainError, ErrorSeverity};
use crate::state::{MealId, Outcome};

/// Records battle outcomes against stored meals.
pub trait StatsRecorder: Send + Sync {
    /// Count one battle for `id`, and one win if `outcome` is [`Outcome::Win`].
    fn update_stats(&self, id: MealId, outcome: Outcome) -> Result<(), StatsError>;

    /// Record a finished battle for both combatants.
    ///
    /// The default records the winner first, then the loser. If the second
    /// update fails the first one stays applied; backends that can apply both
    /// under one write should override this.
    fn record_result(&self, winner: MealId, loser: MealId) -> Result<(), StatsError> {
        self.update_stats(winner, Outcome::Win)?;
        self.update_stats(loser, Outcome::Loss)
    }
}

impl<T: StatsRecorder + ?Sized> StatsRecorder for &T {
    fn update_stats(&self, id: MealId, outcome: Outcome) -> Result<(), StatsError> {
        (**self).update_stats(id, outcome)
    }

    fn record_result(&self, winner: MealId, loser: MealId) -> Result<(), StatsError> {
        (**self).record_result(winner, loser)
    }
}

impl<T: StatsRecorder + ?Sized> StatsRecorder for Box<T> {
    fn update_stats(&self, id: MealId, outcome: Outcome) -> Result<(), StatsError> {
        (**self).update_stats(id, outcome)
    }

    fn record_result(&self, winner: MealId, loser: MealId) -> Result<(), StatsError> {
        (**self).record_result(winner, loser)
    }
}

/// Errors raised while recording battle statistics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("Meal with ID {0} not found")]
    NotFound(MealId),

    #[error("Meal with ID {0} has been deleted")]
    Deleted(MealId),

    /// The backing store failed; the message carries the backend error.
    #[error("failed to store meal stats: {0}")]
    Storage(String),
}

impl DomainError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::Deleted(_) => ErrorSeverity::Validation,
            Self::Storage(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "STATS_MEAL_NOT_FOUND",
            Self::Deleted(_) => "STATS_MEAL_DELETED",
            Self::Storage(_) => "STATS_STORAGE",
        }
    }
}
