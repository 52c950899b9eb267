//! Battle resolution between two prepped meals.
//!
//! [`BattleResolver`] owns the combatant slots for one match. Callers prep up
//! to two meals, then call [`BattleResolver::battle`], which scores both,
//! consults the [`RandomOracle`] once, records the result through the
//! [`StatsRecorder`] and removes the loser. The winner keeps slot 0, so a
//! new challenger can be prepped straight away.
mod errors;

pub use errors::BattleError;

use crate::combat::{battle_score, score_delta};
use crate::env::{RandomOracle, StatsRecorder};
use crate::state::Meal;

/// Number of combatant slots in a match.
pub const MAX_COMBATANTS: usize = 2;

/// Holds the combatants of one match and decides its winner.
pub struct BattleResolver<R, S> {
    combatants: Vec<Meal>,
    oracle: R,
    stats: S,
}

impl<R, S> BattleResolver<R, S>
where
    R: RandomOracle,
    S: StatsRecorder,
{
    pub fn new(oracle: R, stats: S) -> Self {
        Self {
            combatants: Vec::with_capacity(MAX_COMBATANTS),
            oracle,
            stats,
        }
    }

    /// Adds a meal to the next free slot.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::CombatantsFull`] if both slots are taken; the
    /// slot set is left untouched.
    pub fn prep(&mut self, meal: Meal) -> Result<(), BattleError> {
        if self.combatants.len() >= MAX_COMBATANTS {
            tracing::error!(
                "Attempted to add combatant '{}' but combatants list is full",
                meal.name()
            );
            return Err(BattleError::CombatantsFull);
        }

        tracing::info!("Adding combatant '{}' to combatants list", meal.name());
        self.combatants.push(meal);
        tracing::info!("Current combatants list: {:?}", self.combatant_names());

        Ok(())
    }

    /// Score a single meal. See [`battle_score`].
    pub fn score(&self, meal: &Meal) -> f64 {
        battle_score(meal)
    }

    /// Fights the two prepped meals and returns the winner's name.
    ///
    /// Combatant 1 wins when the normalized score delta is strictly greater
    /// than the random draw; otherwise (ties included) combatant 2 wins.
    ///
    /// # Errors
    ///
    /// - [`BattleError::NotEnoughCombatants`] with fewer than two meals
    /// - [`BattleError::Random`] if the draw fails
    /// - [`BattleError::Stats`] if the result cannot be recorded
    ///
    /// The slot set only changes once the result has been recorded.
    pub fn battle(&mut self) -> Result<String, BattleError> {
        tracing::info!("Two meals enter, one meal leaves!");

        if self.combatants.len() < MAX_COMBATANTS {
            tracing::error!("Not enough combatants to start a battle.");
            return Err(BattleError::NotEnoughCombatants {
                present: self.combatants.len(),
            });
        }

        let (combatant_1, combatant_2) = (&self.combatants[0], &self.combatants[1]);
        tracing::info!(
            "Battle started between {} and {}",
            combatant_1.name(),
            combatant_2.name()
        );

        let score_1 = self.score(combatant_1);
        let score_2 = self.score(combatant_2);
        tracing::info!("Score for {}: {:.3}", combatant_1.name(), score_1);
        tracing::info!("Score for {}: {:.3}", combatant_2.name(), score_2);

        let delta = score_delta(score_1, score_2);
        tracing::info!("Delta between scores: {:.3}", delta);

        let draw = self.oracle.random_fraction()?;
        tracing::info!("Random number drawn: {:.3}", draw);

        let (winner_slot, loser_slot) = if delta > draw { (0, 1) } else { (1, 0) };
        let winner = &self.combatants[winner_slot];
        let loser = &self.combatants[loser_slot];
        tracing::info!("The winner is: {}", winner.name());

        self.stats.record_result(winner.id(), loser.id())?;

        let loser = self.combatants.remove(loser_slot);
        tracing::debug!("Removed losing combatant '{}'", loser.name());

        Ok(self.combatants[0].name().to_string())
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        tracing::info!("Clearing the combatants list.");
        self.combatants.clear();
    }

    /// Current combatants in prep order.
    pub fn list_combatants(&self) -> &[Meal] {
        tracing::debug!("Retrieving current list of combatants.");
        &self.combatants
    }

    /// True once both slots are filled.
    pub fn is_ready(&self) -> bool {
        self.combatants.len() >= MAX_COMBATANTS
    }

    fn combatant_names(&self) -> Vec<&str> {
        self.combatants.iter().map(Meal::name).collect()
    }
}
