//! Repository layer for the meal catalog.
//!
//! The catalog holds data that CHANGES as battles are fought:
//! - Meal records (create, soft delete, lookup)
//! - Win/loss counters
//!
//! Randomness is handled by oracles, not repositories.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileCatalog;
pub use memory::InMemoryCatalog;
pub use traits::CatalogRepository;
pub use types::{CatalogSnapshot, LeaderboardEntry, LeaderboardSort, MealRecord, NewMeal};
