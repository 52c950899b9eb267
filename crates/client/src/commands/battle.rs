//! Battle commands.

use anyhow::Result;
use clap::Parser;
use console::style;
use meal_core::MealId;
use meal_runtime::{Arena, GauntletReport};

use super::parse_meal_id;

/// Fight two meals and record the result
#[derive(Parser, Debug)]
pub struct Battle {
    /// Meal taking the first slot
    #[arg(value_parser = parse_meal_id)]
    pub first: MealId,

    #[arg(value_parser = parse_meal_id)]
    pub second: MealId,
}

impl Battle {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        let winner = arena.battle(self.first, self.second)?;
        println!("{} {} wins!", style("🏆").yellow(), style(winner).bold());
        Ok(())
    }
}

/// Winner-stays-on run across several meals
#[derive(Parser, Debug)]
pub struct Gauntlet {
    /// Meals in order of appearance; the first one opens
    #[arg(required = true, num_args = 2.., value_parser = parse_meal_id)]
    pub ids: Vec<MealId>,
}

impl Gauntlet {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        let report = arena.gauntlet(&self.ids)?;
        print!("{}", render_report(&report));
        Ok(())
    }
}

fn render_report(report: &GauntletReport) -> String {
    let mut out = String::new();
    for (round, result) in report.rounds.iter().enumerate() {
        out.push_str(&format!(
            "Round {}: {} vs {} -> {}\n",
            round + 1,
            result.defender,
            result.challenger,
            result.winner
        ));
    }
    out.push_str(&format!("Champion: {}\n", report.champion));
    out
}
