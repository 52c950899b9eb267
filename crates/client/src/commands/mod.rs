//! Subcommand implementations.
//!
//! Each command owns its clap arguments and runs against an [`Arena`].

mod battle;
mod catalog;

pub use battle::{Battle, Gauntlet};
pub use catalog::{Clear, Create, Delete, Get, Leaderboard};

use meal_core::MealId;

/// clap value parser for meal ids.
pub(crate) fn parse_meal_id(raw: &str) -> Result<MealId, std::num::ParseIntError> {
    raw.trim().parse().map(MealId)
}
