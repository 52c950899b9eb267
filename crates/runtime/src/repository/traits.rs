//! Repository contract for the meal catalog.

use meal_core::{MealId, Outcome, StatsRecorder};

use super::{LeaderboardEntry, LeaderboardSort, MealRecord, NewMeal, Result};

/// Persistent store of meals and their battle statistics.
///
/// Deletion is soft: deleted meals keep their id and name but are invisible
/// to lookups, stat updates and the leaderboard.
///
/// Every catalog is also a [`StatsRecorder`], so it can be handed straight to
/// a [`meal_core::BattleResolver`].
pub trait CatalogRepository: StatsRecorder + Send + Sync {
    /// Add a meal; the catalog assigns its id.
    fn create_meal(&self, meal: NewMeal) -> Result<MealRecord>;

    /// Soft-delete a meal.
    fn delete_meal(&self, id: MealId) -> Result<()>;

    /// Fetch an active meal by id.
    fn get_meal_by_id(&self, id: MealId) -> Result<MealRecord>;

    /// Fetch an active meal by exact name.
    fn get_meal_by_name(&self, name: &str) -> Result<MealRecord>;

    /// Count one battle, plus one win when `outcome` is a win.
    fn update_meal_stats(&self, id: MealId, outcome: Outcome) -> Result<()>;

    /// Record a finished battle for both meals in a single write.
    fn record_battle(&self, winner: MealId, loser: MealId) -> Result<()>;

    /// Active meals with at least one battle, best first.
    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>>;

    /// Remove every meal and restart the id sequence.
    fn clear_meals(&self) -> Result<()>;
}
