use meal_core::{Difficulty, Meal, MealId};
use serde::{Deserialize, Serialize};

/// Input for creating a catalog entry. The catalog assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMeal {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl NewMeal {
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        }
    }
}

/// A stored meal with its battle history.
///
/// Deleted records stay in the catalog so their ids are never reused.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(flatten)]
    pub meal: Meal,
    #[serde(default)]
    pub battles: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub deleted: bool,
}

impl MealRecord {
    pub fn new(meal: Meal) -> Self {
        Self {
            meal,
            battles: 0,
            wins: 0,
            deleted: false,
        }
    }

    pub fn id(&self) -> MealId {
        self.meal.id()
    }

    /// Fraction of battles won, `0.0` before the first battle.
    pub fn win_ratio(&self) -> f64 {
        if self.battles == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.battles)
        }
    }
}
