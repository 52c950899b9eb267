//! Battle rules and data types shared across the meal arena.
//!
//! `meal-core` defines the canonical rules (meals, scoring, battle resolution)
//! and exposes pure APIs that can be reused by catalog backends and clients.
//! Every battle flows through [`battle::BattleResolver`], which talks to the
//! outside world only through the collaborator traits in [`env`].
pub mod battle;
pub mod combat;
pub mod env;
pub mod error;
pub mod state;

pub use battle::{BattleError, BattleResolver, MAX_COMBATANTS};
pub use combat::{DELTA_NORMALIZER, battle_score, difficulty_penalty, score_delta};
pub use env::{FixedRandomOracle, RandomError, RandomOracle, StatsError, StatsRecorder};
pub use error::{DomainError, ErrorSeverity};
pub use state::{Difficulty, Meal, MealError, MealId, Outcome};
