//! Catalog management commands.

use anyhow::Result;
use clap::Parser;
use console::style;
use meal_core::{Difficulty, MealId};
use meal_runtime::{
    Arena, CatalogRepository, LeaderboardEntry, LeaderboardSort, MealRecord, NewMeal,
};

use super::parse_meal_id;

/// Add a meal to the catalog
#[derive(Parser, Debug)]
pub struct Create {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub cuisine: String,

    /// Must be positive
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    /// LOW, MED or HIGH
    #[arg(long, value_parser = Difficulty::parse)]
    pub difficulty: Difficulty,
}

impl Create {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        let record = arena.catalog().create_meal(NewMeal::new(
            self.name,
            self.cuisine,
            self.price,
            self.difficulty,
        ))?;

        println!(
            "{} Created meal {} ({})",
            style("✓").green(),
            style(record.meal.name()).bold(),
            record.id()
        );
        Ok(())
    }
}

/// Show one meal by id or by name
#[derive(Parser, Debug)]
pub struct Get {
    /// Meal id
    #[arg(value_parser = parse_meal_id, required_unless_present = "name", conflicts_with = "name")]
    pub id: Option<MealId>,

    /// Exact meal name
    #[arg(long)]
    pub name: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Get {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        let record = match (self.id, self.name.as_deref()) {
            (Some(id), _) => arena.catalog().get_meal_by_id(id)?,
            (None, Some(name)) => arena.catalog().get_meal_by_name(name)?,
            (None, None) => anyhow::bail!("either an id or --name is required"),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            print_record(&record);
        }
        Ok(())
    }
}

fn print_record(record: &MealRecord) {
    let meal = &record.meal;
    println!("{} {}", style(format!("#{}", meal.id())).dim(), style(meal.name()).bold());
    println!("  cuisine:    {}", meal.cuisine());
    println!("  price:      {:.2}", meal.price());
    println!("  difficulty: {}", meal.difficulty());
    println!("  record:     {} wins / {} battles", record.wins, record.battles);
}

/// Soft-delete a meal
#[derive(Parser, Debug)]
pub struct Delete {
    #[arg(value_parser = parse_meal_id)]
    pub id: MealId,
}

impl Delete {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        arena.catalog().delete_meal(self.id)?;
        println!("{} Deleted meal {}", style("✓").green(), self.id);
        Ok(())
    }
}

/// Rank meals that have fought at least once
#[derive(Parser, Debug)]
pub struct Leaderboard {
    /// wins or win-pct
    #[arg(long, default_value = "wins", value_parser = LeaderboardSort::parse)]
    pub sort: LeaderboardSort,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Leaderboard {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        let entries = arena.catalog().leaderboard(self.sort)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("{}", style("No battles fought yet").dim());
            return Ok(());
        }

        println!(
            "{}",
            style(format!(
                "{:>4}  {:<24} {:<12} {:>7} {:>6} {:>8}",
                "id", "meal", "cuisine", "battles", "wins", "win %"
            ))
            .bold()
        );
        for entry in &entries {
            println!("{}", format_row(entry));
        }
        Ok(())
    }
}

fn format_row(entry: &LeaderboardEntry) -> String {
    format!(
        "{:>4}  {:<24} {:<12} {:>7} {:>6} {:>8.1}",
        entry.id.0, entry.name, entry.cuisine, entry.battles, entry.wins, entry.win_pct
    )
}

/// Remove every meal from the catalog
#[derive(Parser, Debug)]
pub struct Clear {}

impl Clear {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        arena.catalog().clear_meals()?;
        println!("{} Catalog cleared", style("✓").green());
        Ok(())
    }
}
