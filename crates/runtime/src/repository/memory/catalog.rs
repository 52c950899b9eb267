//! In-memory CatalogRepository implementation for tests and local runs.

use std::sync::RwLock;

use meal_core::{MealId, Outcome, StatsError, StatsRecorder};

use crate::repository::{
    CatalogRepository, CatalogSnapshot, LeaderboardEntry, LeaderboardSort, MealRecord, NewMeal,
    RepositoryError, Result,
};

/// In-memory implementation of CatalogRepository.
///
/// Nothing survives the process; use [`FileCatalog`](crate::FileCatalog) to keep stats.
pub struct InMemoryCatalog {
    catalog: RwLock<CatalogSnapshot>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::with_snapshot(CatalogSnapshot::default())
    }

    /// Start from an existing document.
    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            catalog: RwLock::new(snapshot),
        }
    }

    /// Copy of the current document.
    pub fn snapshot(&self) -> Result<CatalogSnapshot> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(catalog.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&CatalogSnapshot) -> Result<T>) -> Result<T> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        f(&catalog)
    }

    fn write<T>(&self, f: impl FnOnce(&mut CatalogSnapshot) -> Result<T>) -> Result<T> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        f(&mut catalog)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn create_meal(&self, meal: NewMeal) -> Result<MealRecord> {
        let record = self.write(|catalog| catalog.create(meal))?;
        tracing::info!("Meal successfully added to the database: {}", record.meal.name());
        Ok(record)
    }

    fn delete_meal(&self, id: MealId) -> Result<()> {
        self.write(|catalog| catalog.soft_delete(id))?;
        tracing::info!("Meal with ID {} marked as deleted.", id);
        Ok(())
    }

    fn get_meal_by_id(&self, id: MealId) -> Result<MealRecord> {
        self.read(|catalog| catalog.active(id).cloned())
    }

    fn get_meal_by_name(&self, name: &str) -> Result<MealRecord> {
        self.read(|catalog| catalog.active_by_name(name).cloned())
    }

    fn update_meal_stats(&self, id: MealId, outcome: Outcome) -> Result<()> {
        self.write(|catalog| catalog.update_stats(id, outcome))?;
        tracing::debug!("Recorded {} for meal {}", outcome, id);
        Ok(())
    }

    fn record_battle(&self, winner: MealId, loser: MealId) -> Result<()> {
        self.write(|catalog| catalog.record_battle(winner, loser))?;
        tracing::debug!("Recorded battle: winner={}, loser={}", winner, loser);
        Ok(())
    }

    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>> {
        self.read(|catalog| Ok(catalog.leaderboard(sort)))
    }

    fn clear_meals(&self) -> Result<()> {
        self.write(|catalog| {
            catalog.clear();
            Ok(())
        })?;
        tracing::info!("Meals cleared successfully.");
        Ok(())
    }
}

impl StatsRecorder for InMemoryCatalog {
    fn update_stats(&self, id: MealId, outcome: Outcome) -> std::result::Result<(), StatsError> {
        Ok(self.update_meal_stats(id, outcome)?)
    }

    fn record_result(&self, winner: MealId, loser: MealId) -> std::result::Result<(), StatsError> {
        Ok(self.record_battle(winner, loser)?)
    }
}
