//! Runtime adapters for the meal arena.
//!
//! This crate plugs storage and randomness into the pure battle rules of
//! `meal-core`. Consumers build an [`Arena`] from a [`RuntimeConfig`] and use
//! it to run battles and manage the catalog.
//!
//! Modules are organized by responsibility:
//! - [`repository`] stores meals and their win/loss counters
//! - [`oracle`] provides random draws (random.org or scripted)
//! - [`arena`] composes both into battle resolvers
//! - [`config`] reads the environment
pub mod arena;
pub mod config;
pub mod error;
pub mod oracle;
pub mod repository;

pub use arena::{Arena, GauntletReport, RoundResult};
pub use config::{CatalogBackend, RandomSource, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use oracle::{FixedRandomOracle, RandomOrgOracle};
pub use repository::{
    CatalogRepository, CatalogSnapshot, FileCatalog, InMemoryCatalog, LeaderboardEntry,
    LeaderboardSort, MealRecord, NewMeal, RepositoryError,
};
