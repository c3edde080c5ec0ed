use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{BoardError, GameConfig, Match, MatchOutcome, RandomPlayer, Side};

fn run_match(seed: u64, obstacles: bool) -> Result<(MatchOutcome, Match), BoardError> {
    let config = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(seed);
    let first = RandomPlayer::new(&config, &mut rng);
    let second = RandomPlayer::new(&config, &mut rng);
    let mut game = Match::new(
        &config,
        Box::new(first),
        Box::new(second),
        obstacles,
        &mut rng,
    )?;
    let outcome = game.run(&mut rng)?;
    Ok((outcome, game))
}

#[test]
fn random_match_terminates_with_a_winner() {
    let (outcome, game) = run_match(42, false).unwrap();
    assert!(game.board(outcome.winner.other()).all_destroyed());
    assert!(!game.board(outcome.winner).all_destroyed());
    // each side fires at most once per cell
    assert!(outcome.shots <= 200);
}

#[test]
fn matches_terminate_across_seeds() {
    for seed in 0..25 {
        let (outcome, game) = run_match(seed, false).unwrap();
        assert!(game.board(outcome.winner.other()).all_destroyed());
    }
}

#[test]
fn obstructed_setup_still_plays_to_completion() {
    // placement on a half-blocked grid can exhaust its retry budget, so
    // take the first seed that sets up cleanly
    let mut played = false;
    for seed in 0..30 {
        match run_match(seed, true) {
            Ok((outcome, game)) => {
                assert!(game.board(outcome.winner.other()).all_destroyed());
                // obstructions never survive into play
                let owner_view = game.board(Side::First).render(false);
                assert!(!owner_view.contains('#'));
                played = true;
                break;
            }
            Err(BoardError::UnableToPlaceShip) => continue,
            Err(e) => panic!("unexpected setup error: {}", e),
        }
    }
    assert!(played);
}

#[test]
fn boards_start_with_full_fleets() {
    let config = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(7);
    let first = RandomPlayer::new(&config, &mut rng);
    let second = RandomPlayer::new(&config, &mut rng);
    let game = Match::new(&config, Box::new(first), Box::new(second), false, &mut rng).unwrap();

    for side in [Side::First, Side::Second] {
        let view = game.board(side).render(false);
        for (id, cells) in [(0, 5), (1, 4), (2, 3), (3, 3), (4, 2)] {
            let symbol = config.ship_symbol(id).unwrap();
            assert_eq!(view.chars().filter(|&ch| ch == symbol).count(), cells);
        }
        assert!(!game.board(side).all_destroyed());
    }
}
