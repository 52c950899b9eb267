//! Shared types for the catalog layer.

mod catalog;
mod leaderboard;
mod meal_record;

pub use catalog::CatalogSnapshot;
pub use leaderboard::{LeaderboardEntry, LeaderboardSort};
pub use meal_record::{MealRecord, NewMeal};
