//! Arena: wires a catalog and a random oracle into battle resolvers.
//!
//! The arena owns no combatant state between calls. Every operation builds a
//! fresh [`BattleResolver`] borrowing the arena's collaborators, so one arena
//! can serve any number of sequential matches.

use std::collections::HashSet;

use meal_core::{BattleResolver, FixedRandomOracle, MealId, RandomOracle};

use crate::config::{CatalogBackend, RandomSource, RuntimeConfig};
use crate::error::{Result, RuntimeError};
use crate::oracle::RandomOrgOracle;
use crate::repository::{CatalogRepository, FileCatalog, InMemoryCatalog};

/// One round of a gauntlet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// Meal holding the first slot (previous winner)
    pub defender: String,
    pub challenger: String,
    pub winner: String,
}

/// Outcome of a winner-stays-on run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GauntletReport {
    pub rounds: Vec<RoundResult>,
    pub champion: String,
}

/// Catalog plus randomness source.
pub struct Arena {
    catalog: Box<dyn CatalogRepository>,
    oracle: Box<dyn RandomOracle>,
}

type ArenaResolver<'a> = BattleResolver<&'a dyn RandomOracle, &'a dyn CatalogRepository>;

impl Arena {
    pub fn new(
        catalog: impl CatalogRepository + 'static,
        oracle: impl RandomOracle + 'static,
    ) -> Self {
        Self {
            catalog: Box::new(catalog),
            oracle: Box::new(oracle),
        }
    }

    /// Build the catalog backend and oracle described by `config`.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let catalog: Box<dyn CatalogRepository> = match config.catalog {
            CatalogBackend::Memory => Box::new(InMemoryCatalog::new()),
            CatalogBackend::File => {
                let data_dir = config.resolved_data_dir();
                tracing::debug!("Opening catalog in {}", data_dir.display());
                Box::new(FileCatalog::open(data_dir)?)
            }
        };

        let oracle: Box<dyn RandomOracle> = match &config.random {
            RandomSource::Remote { url, timeout } => Box::new(
                RandomOrgOracle::with_endpoint(url.clone(), *timeout)
                    .map_err(RuntimeError::Oracle)?,
            ),
            RandomSource::Fixed(draws) => Box::new(FixedRandomOracle::new(draws.iter().copied())),
        };

        tracing::info!("Arena ready: catalog={}", config.catalog);
        Ok(Self { catalog, oracle })
    }

    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog.as_ref()
    }

    fn resolver(&self) -> ArenaResolver<'_> {
        BattleResolver::new(self.oracle.as_ref(), self.catalog.as_ref())
    }

    /// Fight two catalog meals and return the winner's name.
    ///
    /// `first` takes slot 0 and so wins whenever the score delta beats the draw.
    pub fn battle(&self, first: MealId, second: MealId) -> Result<String> {
        if first == second {
            return Err(RuntimeError::SelfBattle(first));
        }

        let mut resolver = self.resolver();
        resolver.prep(self.catalog.get_meal_by_id(first)?.meal)?;
        resolver.prep(self.catalog.get_meal_by_id(second)?.meal)?;

        Ok(resolver.battle()?)
    }

    /// Winner-stays-on: each winner defends slot 0 against the next meal.
    ///
    /// Stats are recorded after every round, so an error part-way through
    /// keeps the rounds already fought.
    pub fn gauntlet(&self, ids: &[MealId]) -> Result<GauntletReport> {
        let [opener, challengers @ ..] = ids else {
            return Err(RuntimeError::NotEnoughEntrants(0));
        };
        if challengers.is_empty() {
            return Err(RuntimeError::NotEnoughEntrants(ids.len()));
        }

        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(duplicate) = ids.iter().find(|id| !seen.insert(**id)) {
            return Err(RuntimeError::SelfBattle(*duplicate));
        }

        let mut resolver = self.resolver();
        let opener = self.catalog.get_meal_by_id(*opener)?.meal;
        let mut champion = opener.name().to_string();
        resolver.prep(opener)?;

        let mut rounds = Vec::with_capacity(challengers.len());
        for id in challengers {
            let challenger = self.catalog.get_meal_by_id(*id)?.meal;
            let challenger_name = challenger.name().to_string();
            resolver.prep(challenger)?;

            let winner = resolver.battle()?;
            tracing::info!("Gauntlet round {}: {} prevails", rounds.len() + 1, winner);

            rounds.push(RoundResult {
                defender: champion,
                challenger: challenger_name,
                winner: winner.clone(),
            });
            champion = winner;
        }

        Ok(GauntletReport { rounds, champion })
    }
}
