//! File-based CatalogRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use meal_core::{MealId, Outcome, StatsError, StatsRecorder};

use crate::repository::{
    CatalogRepository, CatalogSnapshot, LeaderboardEntry, LeaderboardSort, MealRecord, NewMeal,
    RepositoryError, Result,
};

/// File name of the catalog document inside the data directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// File-based implementation of CatalogRepository.
///
/// The document is cached in memory and written back after every mutation.
/// Writes go to a temp file first and are renamed into place, so a crash
/// leaves either the old or the new catalog on disk. If the write fails the
/// in-memory copy is left untouched.
pub struct FileCatalog {
    path: PathBuf,
    catalog: RwLock<CatalogSnapshot>,
}

impl FileCatalog {
    /// Open (or create) the catalog stored in `base_dir`.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;

        let path = base_dir.join(CATALOG_FILE);
        let snapshot = if path.exists() {
            let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
            let snapshot: CatalogSnapshot =
                serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;
            tracing::debug!(
                "Loaded catalog with {} meals from {}",
                snapshot.len(),
                path.display()
            );
            snapshot
        } else {
            CatalogSnapshot::default()
        };

        Ok(Self {
            path,
            catalog: RwLock::new(snapshot),
        })
    }

    /// Location of the catalog document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        // Write to temp file
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved catalog: {}", self.path.display());
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&CatalogSnapshot) -> Result<T>) -> Result<T> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        f(&catalog)
    }

    /// Apply `f` to a copy, persist it, then swap it in.
    fn write<T>(&self, f: impl FnOnce(&mut CatalogSnapshot) -> Result<T>) -> Result<T> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut next = catalog.clone();
        let value = f(&mut next)?;
        self.persist(&next)?;
        *catalog = next;

        Ok(value)
    }
}

impl CatalogRepository for FileCatalog {
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

impl StatsRecorder for FileCatalog {
    fn update_stats(&self, id: MealId, outcome: Outcome) -> std::result::Result<(), StatsError> {
        Ok(self.update_meal_stats(id, outcome)?)
    }

    fn record_result(&self, winner: MealId, loser: MealId) -> std::result::Result<(), StatsError> {
        Ok(self.record_battle(winner, loser)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meal_core::Difficulty;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileCatalog) {
        let temp_dir = TempDir::new().unwrap();
        let catalog = FileCatalog::open(temp_dir.path()).unwrap();
        (temp_dir, catalog)
    }

    #[test]
    fn test_reopen_keeps_meals_and_stats() {
        let (temp, catalog) = setup();
        let first = catalog
            .create_meal(NewMeal::new("Pancakes", "**", 12.20, Difficulty::Med))
            .unwrap();
        let second = catalog
            .create_meal(NewMeal::new("Ramen", "Japanese", 9.5, Difficulty::High))
            .unwrap();
        catalog.record_battle(first.id(), second.id()).unwrap();
        catalog.delete_meal(second.id()).unwrap();
        drop(catalog);

        let reopened = FileCatalog::open(temp.path()).unwrap();
        let stored = reopened.get_meal_by_id(first.id()).unwrap();
        assert_eq!(stored.battles, 1);
        assert_eq!(stored.wins, 1);
        assert_eq!(stored.meal.difficulty(), Difficulty::Med);
        assert!(matches!(
            reopened.get_meal_by_id(second.id()),
            Err(RepositoryError::Deleted(_))
        ));

        let next = reopened
            .create_meal(NewMeal::new("Tacos", "Mexican", 7.0, Difficulty::Low))
            .unwrap();
        assert_eq!(next.id(), MealId(3));
    }

    #[test]
    fn test_failed_validation_does_not_touch_disk() {
        let (_temp, catalog) = setup();
        assert!(
            catalog
                .create_meal(NewMeal::new("Meal 1", "Cuisine 1", -1.0, Difficulty::Low))
                .is_err()
        );
        assert!(!catalog.path().exists());
    }

    #[test]
    fn test_clear_persists_empty_catalog() {
        let (temp, catalog) = setup();
        catalog
            .create_meal(NewMeal::new("Pancakes", "**", 12.20, Difficulty::Med))
            .unwrap();
        catalog.clear_meals().unwrap();
        drop(catalog);

        let reopened = FileCatalog::open(temp.path()).unwrap();
        assert!(reopened.leaderboard(LeaderboardSort::Wins).unwrap().is_empty());
        assert!(matches!(
            reopened.get_meal_by_id(MealId(1)),
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[test]
    fn test_stored_meal_with_bad_price_is_rejected() {
        let temp = TempDir::new().unwrap();
        let document = r#"{
            "last_id": 1,
            "meals": {
                "1": {
                    "id": 1,
                    "name": "Pancakes",
                    "cuisine": "**",
                    "price": -3.0,
                    "difficulty": "MED",
                    "battles": 0,
                    "wins": 0,
                    "deleted": false
                }
            }
        }"#;
        fs::write(temp.path().join(CATALOG_FILE), document).unwrap();

        match FileCatalog::open(temp.path()) {
            Err(RepositoryError::Json(message)) => {
                assert!(message.contains("Price must be a positive number"), "{message}");
            }
            Err(other) => panic!("expected JSON error, got {other}"),
            Ok(_) => panic!("catalog with a negative price was accepted"),
        }

        let valid = document.replace("-3.0", "3.0");
        fs::write(temp.path().join(CATALOG_FILE), valid).unwrap();
        let catalog = FileCatalog::open(temp.path()).unwrap();
        assert_eq!(catalog.get_meal_by_id(MealId(1)).unwrap().meal.price(), 3.0);
    }

    #[test]
    fn test_corrupted_document_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CATALOG_FILE), "not json").unwrap();

        assert!(matches!(
            FileCatalog::open(temp.path()),
            Err(RepositoryError::Json(_))
        ));
    }
}
