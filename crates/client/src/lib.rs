//! Meal Max command-line client.
//!
//! The binary is a thin composition root: it reads [`ClientConfig`] from the
//! environment, installs logging, builds an [`meal_runtime::Arena`] and hands
//! it to the selected [`Command`].

pub mod commands;
pub mod config;
pub mod logging;

use anyhow::Result;
use clap::Parser;
use meal_runtime::Arena;

use commands::{Battle, Clear, Create, Delete, Gauntlet, Get, Leaderboard};
pub use config::ClientConfig;

/// Meal battles backed by random.org
#[derive(Parser, Debug)]
#[command(name = "meal-max")]
#[command(about = "Pit meals against each other and track the results", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Add a meal to the catalog
    Create(Create),

    /// Show one meal
    Get(Get),

    /// Soft-delete a meal
    Delete(Delete),

    /// Rank meals by wins or win percentage
    Leaderboard(Leaderboard),

    /// Fight two meals
    Battle(Battle),

    /// Winner-stays-on run across several meals
    Gauntlet(Gauntlet),

    /// Remove every meal
    Clear(Clear),
}

impl Command {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        match self {
            Command::Create(cmd) => cmd.execute(arena),
            Command::Get(cmd) => cmd.execute(arena),
            Command::Delete(cmd) => cmd.execute(arena),
            Command::Leaderboard(cmd) => cmd.execute(arena),
            Command::Battle(cmd) => cmd.execute(arena),
            Command::Gauntlet(cmd) => cmd.execute(arena),
            Command::Clear(cmd) => cmd.execute(arena),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use meal_core::{Difficulty, MealId};
    use meal_runtime::LeaderboardSort;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("meal-max").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_parses_difficulty_case_insensitively() {
        let cli = parse(&[
            "create",
            "--name",
            "Ramen",
            "--cuisine",
            "Japanese",
            "--price",
            "9.5",
            "--difficulty",
            "high",
        ])
        .unwrap();

        let Command::Create(create) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(create.difficulty, Difficulty::High);
        assert_eq!(create.price, 9.5);
    }

    #[test]
    fn create_rejects_unknown_difficulty() {
        assert!(
            parse(&[
                "create",
                "--name",
                "Ramen",
                "--cuisine",
                "Japanese",
                "--price",
                "9.5",
                "--difficulty",
                "EXTREME",
            ])
            .is_err()
        );
    }

    #[test]
    fn get_takes_id_or_name() {
        let Command::Get(get) = parse(&["get", "3"]).unwrap().command else {
            panic!("expected get");
        };
        assert_eq!(get.id, Some(MealId(3)));

        let Command::Get(get) = parse(&["get", "--name", "Ramen"]).unwrap().command else {
            panic!("expected get");
        };
        assert_eq!(get.name.as_deref(), Some("Ramen"));

        assert!(parse(&["get"]).is_err());
        assert!(parse(&["get", "3", "--name", "Ramen"]).is_err());
    }

    #[test]
    fn leaderboard_sort_defaults_to_wins() {
        let Command::Leaderboard(board) = parse(&["leaderboard"]).unwrap().command else {
            panic!("expected leaderboard");
        };
        assert_eq!(board.sort, LeaderboardSort::Wins);

        let Command::Leaderboard(board) = parse(&["leaderboard", "--sort", "win-pct"])
            .unwrap()
            .command
        else {
            panic!("expected leaderboard");
        };
        assert_eq!(board.sort, LeaderboardSort::WinPct);

        assert!(parse(&["leaderboard", "--sort", "losses"]).is_err());
    }

    #[test]
    fn gauntlet_needs_two_ids() {
        assert!(parse(&["gauntlet", "1"]).is_err());

        let Command::Gauntlet(gauntlet) = parse(&["gauntlet", "1", "2", "3"]).unwrap().command
        else {
            panic!("expected gauntlet");
        };
        assert_eq!(gauntlet.ids, vec![MealId(1), MealId(2), MealId(3)]);
    }
}
