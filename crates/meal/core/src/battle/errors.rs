//! Error types for the battle pipeline.

use crate::env::{RandomError, StatsError};
use crate::error::{DomainError, ErrorSeverity};

/// Errors surfaced while prepping or running a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("Combatant list is full, cannot add more combatants.")]
    CombatantsFull,

    #[error("Two combatants must be prepped for a battle.")]
    NotEnoughCombatants { present: usize },

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl DomainError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CombatantsFull | Self::NotEnoughCombatants { .. } => ErrorSeverity::Validation,
            Self::Random(err) => err.severity(),
            Self::Stats(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CombatantsFull => "BATTLE_COMBATANTS_FULL",
            Self::NotEnoughCombatants { .. } => "BATTLE_NOT_ENOUGH_COMBATANTS",
            Self::Random(err) => err.error_code(),
            Self::Stats(err) => err.error_code(),
        }
    }
}
