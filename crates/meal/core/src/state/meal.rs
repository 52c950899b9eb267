use std::fmt;

use super::MealError;

/// Unique identifier for a meal in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MealId(pub u32);

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How hard a meal is to prepare.
///
/// Harder meals take a smaller penalty in battle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Difficulty {
    High,
    Med,
    Low,
}

impl Difficulty {
    /// Parses `HIGH`, `MED` or `LOW` (any case).
    pub fn parse(raw: &str) -> Result<Self, MealError> {
        raw.trim()
            .parse()
            .map_err(|_| MealError::InvalidDifficulty(raw.to_string()))
    }
}

/// Result of a single battle from one combatant's point of view.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Parses `win` or `loss` (any case).
    pub fn parse(raw: &str) -> Result<Self, MealError> {
        raw.trim()
            .parse()
            .map_err(|_| MealError::InvalidOutcome(raw.to_string()))
    }
}

/// A meal as it enters the arena.
///
/// Fields are read-only: every `Meal` has passed the price check in
/// [`Meal::new`], including meals loaded from storage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MealFields"))]
pub struct Meal {
    id: MealId,
    name: String,
    cuisine: String,
    price: f64,
    difficulty: Difficulty,
}

impl Meal {
    /// Creates a meal, rejecting non-positive (or non-finite) prices.
    pub fn new(
        id: MealId,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<Self, MealError> {
        validate_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        })
    }

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cuisine label; its character count multiplies the price in battle.
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Unchecked wire form of [`Meal`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MealFields {
    id: MealId,
    name: String,
    cuisine: String,
    price: f64,
    difficulty: Difficulty,
}

#[cfg(feature = "serde")]
impl TryFrom<MealFields> for Meal {
    type Error = MealError;

    fn try_from(fields: MealFields) -> Result<Self, Self::Error> {
        Meal::new(
            fields.id,
            fields.name,
            fields.cuisine,
            fields.price,
            fields.difficulty,
        )
    }
}

/// Prices must be finite and strictly positive.
pub(crate) fn validate_price(price: f64) -> Result<(), MealError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(MealError::InvalidPrice(price))
    }
}
