//! `meal-max` binary.
//!
//! ```bash
//! meal-max create --name Ramen --cuisine Japanese --price 9.5 --difficulty HIGH
//! meal-max battle 1 2
//! meal-max leaderboard --sort win-pct
//! ```

use anyhow::Result;
use clap::Parser;
use meal_client::{Cli, ClientConfig, logging};
use meal_runtime::Arena;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;

    // Flushes the log file on drop
    let _guard = logging::setup_logging(&config.log_dir)?;

    let arena = Arena::from_config(&config.runtime)?;
    let result = cli.command.execute(&arena);

    if let Err(err) = &result {
        logging::log_failure(err);
    }
    result
}
