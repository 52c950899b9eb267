use meal_core::{BattleError, Difficulty, MealId, RandomError};
use meal_runtime::{
    Arena, CatalogRepository, FileCatalog, FixedRandomOracle, InMemoryCatalog, LeaderboardSort,
    NewMeal, RepositoryError, RuntimeError,
};
use tempfile::TempDir;

/// Seeds three meals:
/// 1. "Ninety"      scores 90 (22.75 × 4 − 1)
/// 2. "Eighty Five" scores 85 (22 × 4 − 3)
/// 3. "Wellington"  scores 174.5 (35.10 × 5 − 1)
fn seed(catalog: &dyn CatalogRepository) {
    for meal in [
        NewMeal::new("Ninety", "Thai", 22.75, Difficulty::High),
        NewMeal::new("Eighty Five", "Thai", 22.0, Difficulty::Low),
        NewMeal::new("Wellington", "*****", 35.10, Difficulty::High),
    ] {
        catalog.create_meal(meal).unwrap();
    }
}

fn arena_with(draws: &[f64]) -> Arena {
    let catalog = InMemoryCatalog::new();
    seed(&catalog);
    Arena::new(catalog, FixedRandomOracle::new(draws.iter().copied()))
}

#[test]
fn battle_records_win_and_loss() {
    let arena = arena_with(&[0.02]);

    let winner = arena.battle(MealId(1), MealId(2)).unwrap();
    assert_eq!(winner, "Ninety");

    let winner = arena.catalog().get_meal_by_id(MealId(1)).unwrap();
    let loser = arena.catalog().get_meal_by_id(MealId(2)).unwrap();
    assert_eq!((winner.battles, winner.wins), (1, 1));
    assert_eq!((loser.battles, loser.wins), (1, 0));
}

#[test]
fn tie_goes_to_second_slot() {
    let arena = arena_with(&[0.05]);

    let winner = arena.battle(MealId(2), MealId(1)).unwrap();
    assert_eq!(winner, "Ninety");

    let board = arena.catalog().leaderboard(LeaderboardSort::Wins).unwrap();
    assert_eq!(board[0].id, MealId(1));
    assert_eq!(board[0].win_pct, 100.0);
    assert_eq!(board[1].win_pct, 0.0);
}

#[test]
fn failed_draw_records_nothing() {
    let arena = arena_with(&[]);

    let err = arena.battle(MealId(1), MealId(2)).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Battle(BattleError::Random(RandomError::Exhausted))
    ));
    assert!(
        arena
            .catalog()
            .leaderboard(LeaderboardSort::Wins)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn deleted_meals_cannot_battle() {
    let arena = arena_with(&[0.5]);
    arena.catalog().delete_meal(MealId(2)).unwrap();

    let err = arena.battle(MealId(1), MealId(2)).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Repository(RepositoryError::Deleted(MealId(2)))
    ));
}

#[test]
fn meal_cannot_battle_itself() {
    let arena = arena_with(&[0.5]);
    assert!(matches!(
        arena.battle(MealId(1), MealId(1)),
        Err(RuntimeError::SelfBattle(MealId(1)))
    ));
    assert!(matches!(
        arena.gauntlet(&[MealId(1), MealId(2), MealId(1)]),
        Err(RuntimeError::SelfBattle(MealId(1)))
    ));
}

#[test]
fn gauntlet_keeps_winner_in_first_slot() {
    // Round 1: Ninety vs Eighty Five, delta 0.05 > 0.01 -> Ninety.
    // Round 2: Ninety vs Wellington, delta 0.845 <= 0.9 -> Wellington.
    let arena = arena_with(&[0.01, 0.9]);

    let report = arena
        .gauntlet(&[MealId(1), MealId(2), MealId(3)])
        .unwrap();

    assert_eq!(report.champion, "Wellington");
    assert_eq!(report.rounds.len(), 2);
    assert_eq!(report.rounds[0].defender, "Ninety");
    assert_eq!(report.rounds[0].winner, "Ninety");
    assert_eq!(report.rounds[1].defender, "Ninety");
    assert_eq!(report.rounds[1].challenger, "Wellington");

    let ninety = arena.catalog().get_meal_by_id(MealId(1)).unwrap();
    assert_eq!((ninety.battles, ninety.wins), (2, 1));
}

#[test]
fn gauntlet_needs_two_entrants() {
    let arena = arena_with(&[]);
    assert!(matches!(
        arena.gauntlet(&[]),
        Err(RuntimeError::NotEnoughEntrants(0))
    ));
    assert!(matches!(
        arena.gauntlet(&[MealId(1)]),
        Err(RuntimeError::NotEnoughEntrants(1))
    ));
}

#[test]
fn file_backed_arena_persists_results() {
    let temp = TempDir::new().unwrap();
    {
        let catalog = FileCatalog::open(temp.path()).unwrap();
        seed(&catalog);
        let arena = Arena::new(catalog, FixedRandomOracle::new([0.02]));
        arena.battle(MealId(1), MealId(2)).unwrap();
    }

    let catalog = FileCatalog::open(temp.path()).unwrap();
    let board = catalog.leaderboard(LeaderboardSort::WinPct).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].name, "Ninety");
    assert_eq!(board[0].wins, 1);
}
