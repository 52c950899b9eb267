use crate::state::{Difficulty, Meal};

/// Divisor applied to the absolute score gap before comparing it with a draw.
///
/// Scores are assumed to sit within roughly a hundred points of each other;
/// larger gaps produce a delta above 1 and therefore a guaranteed first-slot win.
pub const DELTA_NORMALIZER: f64 = 100.0;

/// Penalty subtracted from a meal's score for its difficulty.
pub const fn difficulty_penalty(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::High => 1.0,
        Difficulty::Med => 2.0,
        Difficulty::Low => 3.0,
    }
}

/// Calculate the battle score for a meal.
///
/// # Formula
///
/// ```text
/// score = price × len(cuisine) − difficulty_penalty
/// ```
///
/// `len` counts characters, not bytes.
pub fn battle_score(meal: &Meal) -> f64 {
    tracing::info!(
        "Calculating battle score for {}: price={:.3}, cuisine={}, difficulty={}",
        meal.name(),
        meal.price(),
        meal.cuisine(),
        meal.difficulty()
    );

    let cuisine_len = meal.cuisine().chars().count() as f64;
    let score = meal.price() * cuisine_len - difficulty_penalty(meal.difficulty());

    tracing::info!("Battle score for {}: {:.3}", meal.name(), score);
    score
}

/// Normalized gap between two scores: `|a − b| / 100`.
pub fn score_delta(score_1: f64, score_2: f64) -> f64 {
    (score_1 - score_2).abs() / DELTA_NORMALIZER
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::state::MealId;

    fn meal(cuisine: &str, price: f64, difficulty: Difficulty) -> Meal {
        Meal::new(MealId(1), "Test Meal", cuisine, price, difficulty).unwrap()
    }

    #[test]
    fn ratatouille_scores_eighteen_point_six() {
        let score = battle_score(&meal("****", 5.40, Difficulty::Low));
        assert!((score - 18.6).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn beef_wellington_scores_one_seventy_four_and_a_half() {
        let score = battle_score(&meal("*****", 35.10, Difficulty::High));
        assert!((score - 174.5).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn penalty_table_is_applied_for_every_difficulty() {
        for difficulty in Difficulty::iter() {
            let score = battle_score(&meal("French", 10.0, difficulty));
            let expected = 10.0 * 6.0 - difficulty_penalty(difficulty);
            assert!((score - expected).abs() < 1e-12);
        }
        assert_eq!(difficulty_penalty(Difficulty::High), 1.0);
        assert_eq!(difficulty_penalty(Difficulty::Med), 2.0);
        assert_eq!(difficulty_penalty(Difficulty::Low), 3.0);
    }

    #[test]
    fn cuisine_length_counts_characters() {
        let score = battle_score(&meal("Café", 2.0, Difficulty::High));
        assert!((score - 7.0).abs() < 1e-12);
    }

    #[test]
    fn delta_is_symmetric_and_unclamped() {
        assert!((score_delta(90.0, 85.0) - 0.05).abs() < 1e-12);
        assert_eq!(score_delta(85.0, 90.0), score_delta(90.0, 85.0));
        assert!(score_delta(300.0, 0.0) > 1.0);
    }
}
