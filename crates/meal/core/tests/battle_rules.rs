use meal_core::{
    BattleError, BattleResolver, Difficulty, FixedRandomOracle, Meal, MealId, Outcome,
    StatsError, StatsRecorder, battle_score, difficulty_penalty,
};

/// Stats sink that accepts everything.
struct NoopStats;

impl StatsRecorder for NoopStats {
    fn update_stats(&self, _id: MealId, _outcome: Outcome) -> Result<(), StatsError> {
        Ok(())
    }
}

#[test]
fn score_matches_formula_across_catalog() {
    let cuisines = ["", "*", "Thai", "Italian", "Southern Fusion"];
    let prices = [0.01, 1.0, 5.40, 12.20, 35.10, 999.99];
    let difficulties = [Difficulty::High, Difficulty::Med, Difficulty::Low];

    let mut id = 0;
    for cuisine in cuisines {
        for price in prices {
            for difficulty in difficulties {
                id += 1;
                let meal = Meal::new(MealId(id), "Meal", cuisine, price, difficulty).unwrap();
                let expected =
                    price * cuisine.chars().count() as f64 - difficulty_penalty(difficulty);
                assert_eq!(battle_score(&meal), expected, "{meal:?}");
            }
        }
    }
}

#[test]
fn insufficient_combatants_never_touch_state() {
    let oracle = FixedRandomOracle::new([0.1]);
    let mut resolver = BattleResolver::new(&oracle, NoopStats);

    for _ in 0..3 {
        assert!(matches!(
            resolver.battle(),
            Err(BattleError::NotEnoughCombatants { present: 0 })
        ));
    }
    assert!(resolver.list_combatants().is_empty());
    assert_eq!(oracle.remaining(), 1);
}

#[test]
fn huge_score_gap_always_favours_first_slot() {
    let cheap = Meal::new(MealId(1), "Toast", "UK", 0.5, Difficulty::Low).unwrap();
    let lavish = Meal::new(MealId(2), "Wagyu", "Japanese", 200.0, Difficulty::High).unwrap();

    let mut resolver = BattleResolver::new(FixedRandomOracle::new([0.99]), NoopStats);
    resolver.prep(cheap.clone()).unwrap();
    resolver.prep(lavish).unwrap();

    assert_eq!(resolver.battle().unwrap(), "Toast");
    assert_eq!(resolver.list_combatants(), &[cheap]);
}
