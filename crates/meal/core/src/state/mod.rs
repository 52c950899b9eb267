//! Meal records and the enumerations used to describe them.
mod error;
mod meal;

pub use error::MealError;
pub use meal::{Difficulty, Meal, MealId, Outcome};
