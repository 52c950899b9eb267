//! The catalog document shared by every backend.
//!
//! Backends differ only in where the document lives; all validation and
//! bookkeeping happens here so in-memory and file catalogs behave the same.

use std::collections::BTreeMap;

use meal_core::{Meal, MealId, Outcome};
use serde::{Deserialize, Serialize};

use super::{LeaderboardEntry, LeaderboardSort, MealRecord, NewMeal};
use crate::repository::{RepositoryError, Result};

/// All catalog records plus the id sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Last id handed out; ids start at 1.
    #[serde(default)]
    last_id: u32,
    #[serde(default)]
    meals: BTreeMap<MealId, MealRecord>,
}

impl CatalogSnapshot {
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Insert a new meal after validating price and name uniqueness.
    ///
    /// Names stay reserved after a soft delete.
    pub fn create(&mut self, new_meal: NewMeal) -> Result<MealRecord> {
        if self
            .meals
            .values()
            .any(|record| record.meal.name() == new_meal.name)
        {
            return Err(RepositoryError::DuplicateName(new_meal.name));
        }

        let id = MealId(self.last_id + 1);
        let meal = Meal::new(
            id,
            new_meal.name,
            new_meal.cuisine,
            new_meal.price,
            new_meal.difficulty,
        )?;

        let record = MealRecord::new(meal);
        self.meals.insert(id, record.clone());
        self.last_id = id.0;
        Ok(record)
    }

    /// Look up a record that exists and is not deleted.
    pub fn active(&self, id: MealId) -> Result<&MealRecord> {
        match self.meals.get(&id) {
            None => Err(RepositoryError::NotFound(id)),
            Some(record) if record.deleted => Err(RepositoryError::Deleted(id)),
            Some(record) => Ok(record),
        }
    }

    fn active_mut(&mut self, id: MealId) -> Result<&mut MealRecord> {
        match self.meals.get_mut(&id) {
            None => Err(RepositoryError::NotFound(id)),
            Some(record) if record.deleted => Err(RepositoryError::Deleted(id)),
            Some(record) => Ok(record),
        }
    }

    pub fn active_by_name(&self, name: &str) -> Result<&MealRecord> {
        let record = self
            .meals
            .values()
            .find(|record| record.meal.name() == name)
            .ok_or_else(|| RepositoryError::NameNotFound(name.to_string()))?;

        if record.deleted {
            return Err(RepositoryError::Deleted(record.id()));
        }
        Ok(record)
    }

    /// Mark a meal as deleted. Deleting twice is an error.
    pub fn soft_delete(&mut self, id: MealId) -> Result<()> {
        self.active_mut(id)?.deleted = true;
        Ok(())
    }

    pub fn update_stats(&mut self, id: MealId, outcome: Outcome) -> Result<()> {
        let record = self.active_mut(id)?;
        record.battles += 1;
        if outcome == Outcome::Win {
            record.wins += 1;
        }
        Ok(())
    }

    /// Apply a battle result to both meals, or to neither.
    pub fn record_battle(&mut self, winner: MealId, loser: MealId) -> Result<()> {
        self.active(winner)?;
        self.active(loser)?;
        self.update_stats(winner, Outcome::Win)?;
        self.update_stats(loser, Outcome::Loss)
    }

    /// Meals that have fought at least once, best first.
    ///
    /// `WinPct` orders by the exact win ratio; the rounded percentage on each
    /// entry is for display. Ties keep ascending id order.
    pub fn leaderboard(&self, sort: LeaderboardSort) -> Vec<LeaderboardEntry> {
        let mut records: Vec<&MealRecord> = self
            .meals
            .values()
            .filter(|record| !record.deleted && record.battles > 0)
            .collect();

        match sort {
            LeaderboardSort::Wins => records.sort_by(|a, b| b.wins.cmp(&a.wins)),
            LeaderboardSort::WinPct => {
                records.sort_by(|a, b| b.win_ratio().total_cmp(&a.win_ratio()))
            }
        }

        records
            .into_iter()
            .map(LeaderboardEntry::from_record)
            .collect()
    }

    /// Drop every record and restart the id sequence.
    pub fn clear(&mut self) {
        self.meals.clear();
        self.last_id = 0;
    }
}
