use meal_core::{Difficulty, MealId};
use serde::Serialize;

use super::MealRecord;
use crate::repository::{RepositoryError, Result};

/// Ordering applied to the leaderboard (always descending).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl LeaderboardSort {
    /// Parses `wins` or `win_pct`; `win-pct` is accepted too.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .replace('-', "_")
            .parse()
            .map_err(|_| RepositoryError::InvalidSort(raw.to_string()))
    }
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub id: MealId,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    /// Percentage of battles won, rounded to one decimal place.
    pub win_pct: f64,
}

impl LeaderboardEntry {
    /// Builds a row from a record that has fought at least once.
    pub(crate) fn from_record(record: &MealRecord) -> Self {
        let ratio = record.win_ratio();
        Self {
            id: record.meal.id(),
            name: record.meal.name().to_string(),
            cuisine: record.meal.cuisine().to_string(),
            price: record.meal.price(),
            difficulty: record.meal.difficulty(),
            battles: record.battles,
            wins: record.wins,
            win_pct: (ratio * 1000.0).round() / 10.0,
        }
    }
}
